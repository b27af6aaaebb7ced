//! PPTX package writer.

use crate::parts::{self, EMU_PER_POINT, LAYOUTS, NS_DRAWING, NS_PRESENTATION, NS_RELATIONSHIPS};
use quick_xml::escape::escape;
use slides_core::{
    place_slides, render_deck, CodeBlockLayout, Error, Result, SlideDeck, SlideLayout,
    SlidePlacement, SlideRecord, SlideRenderer,
};
use std::io::{Cursor, Seek, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Shape position and size in EMU.
#[derive(Debug, Clone, Copy)]
struct Rect {
    x: i64,
    y: i64,
    cx: i64,
    cy: i64,
}

const CENTER_TITLE_RECT: Rect = Rect { x: 685_800, y: 2_130_425, cx: 7_772_400, cy: 1_470_025 };
const SECTION_TITLE_RECT: Rect = Rect { x: 722_313, y: 2_906_713, cx: 7_772_400, cy: 1_362_075 };
const TITLE_RECT: Rect = Rect { x: 457_200, y: 274_638, cx: 8_229_600, cy: 1_143_000 };
const BODY_RECT: Rect = Rect { x: 457_200, y: 1_600_200, cx: 8_229_600, cy: 4_525_963 };

/// Code text box: 200 pt from the left edge, 500 pt wide, level with the body.
const CODE_RECT: Rect = Rect {
    x: 200 * EMU_PER_POINT,
    y: 1_600_200,
    cx: 500 * EMU_PER_POINT,
    cy: 4_525_963,
};

/// A rendered slide waiting to be packaged.
#[derive(Debug, Clone)]
struct SlidePart {
    layout: SlideLayout,
    xml: String,
}

/// Renders slides into an in-memory PPTX package.
///
/// Feed it through [`render_deck`] (or call the [`SlideRenderer`] methods
/// directly), then call [`PptxWriter::finish`] for the file bytes.
#[derive(Debug, Default)]
pub struct PptxWriter {
    slides: Vec<SlidePart>,
}

impl PptxWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slides created so far.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether no slide has been created.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Render `deck` and splice its slides in at `placement`.
    ///
    /// The new slides keep their order, title slide first. When the placement
    /// names a slide that does not exist nothing is added and the error is
    /// [`Error::InvalidOperation`].
    pub fn insert_deck(&mut self, deck: &SlideDeck, placement: SlidePlacement) -> Result<()> {
        let mut added = PptxWriter::new();
        render_deck(deck, &mut added)?;
        let count = added.len();

        place_slides(&mut self.slides, added.slides, placement)?;
        log::debug!("Inserted {} slide(s) at {:?}", count, placement);
        Ok(())
    }

    /// Write the package and return its bytes.
    pub fn finish(&self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
        let count = self.slides.len();

        write_part(&mut zip, options, "[Content_Types].xml", &parts::content_types(count))?;
        write_part(&mut zip, options, "_rels/.rels", &parts::root_rels())?;
        write_part(&mut zip, options, "ppt/presentation.xml", &parts::presentation(count))?;
        write_part(
            &mut zip,
            options,
            "ppt/_rels/presentation.xml.rels",
            &parts::presentation_rels(count),
        )?;
        write_part(&mut zip, options, "ppt/theme/theme1.xml", &parts::theme())?;
        write_part(
            &mut zip,
            options,
            "ppt/slideMasters/slideMaster1.xml",
            &parts::slide_master(),
        )?;
        write_part(
            &mut zip,
            options,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            &parts::slide_master_rels(),
        )?;

        for layout in LAYOUTS {
            let n = parts::layout_number(layout);
            write_part(
                &mut zip,
                options,
                &format!("ppt/slideLayouts/slideLayout{}.xml", n),
                &parts::slide_layout(layout),
            )?;
            write_part(
                &mut zip,
                options,
                &format!("ppt/slideLayouts/_rels/slideLayout{}.xml.rels", n),
                &parts::slide_layout_rels(),
            )?;
        }

        for (idx, slide) in self.slides.iter().enumerate() {
            write_part(&mut zip, options, &format!("ppt/slides/slide{}.xml", idx + 1), &slide.xml)?;
            write_part(
                &mut zip,
                options,
                &format!("ppt/slides/_rels/slide{}.xml.rels", idx + 1),
                &parts::slide_rels(slide.layout),
            )?;
        }

        let cursor = zip
            .finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish archive: {}", e)))?;
        log::debug!("Wrote PPTX package with {} slide(s)", count);
        Ok(cursor.into_inner())
    }

    fn add(&mut self, layout: SlideLayout, shapes: Vec<String>) {
        self.slides.push(SlidePart {
            layout,
            xml: slide_xml(&shapes),
        });
    }
}

impl SlideRenderer for PptxWriter {
    type Error = Error;

    fn create_title_slide(&mut self, title: &str) -> Result<()> {
        let shape = placeholder_shape(2, "Title 1", r#"type="ctrTitle""#, CENTER_TITLE_RECT, &[text_paragraph(title)]);
        self.add(SlideLayout::Title, vec![shape]);
        Ok(())
    }

    fn create_body_slide(&mut self, slide: &SlideRecord) -> Result<()> {
        let layout = SlideLayout::for_record(slide);
        let mut shapes = Vec::new();

        let title_rect = match layout {
            SlideLayout::SectionHeader => SECTION_TITLE_RECT,
            _ => TITLE_RECT,
        };
        shapes.push(placeholder_shape(
            2,
            "Title 1",
            r#"type="title""#,
            title_rect,
            &[text_paragraph(&slide.title)],
        ));

        if layout == SlideLayout::TitleAndBody {
            let paragraphs: Vec<String> = slide.points.iter().map(|p| bullet_paragraph(p)).collect();
            shapes.push(placeholder_shape(3, "Content 2", r#"idx="1""#, BODY_RECT, &paragraphs));
        }

        if let Some(code) = &slide.code {
            match CodeBlockLayout::from_code(code) {
                Some(code_layout) => shapes.push(code_shape(4, &code_layout)),
                None => log::debug!("Skipping one-line code block on slide {:?}", slide.title),
            }
        }

        self.add(layout, shapes);
        Ok(())
    }
}

/// Render a deck straight to PPTX bytes.
pub fn write_deck(deck: &SlideDeck) -> Result<Vec<u8>> {
    let mut writer = PptxWriter::new();
    render_deck(deck, &mut writer)?;
    writer.finish()
}

fn write_part<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    options: FileOptions,
    path: &str,
    content: &str,
) -> Result<()> {
    zip.start_file(path, options)
        .map_err(|e| Error::ZipError(format!("Failed to add '{}': {}", path, e)))?;
    zip.write_all(content.as_bytes())?;
    Ok(())
}

fn slide_xml(shapes: &[String]) -> String {
    format!(
        r#"{}
<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"><p:cSld><p:spTree>{}{}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"#,
        parts::XML_DECL,
        NS_DRAWING,
        NS_RELATIONSHIPS,
        NS_PRESENTATION,
        parts::SHAPE_TREE_HEADER,
        shapes.concat()
    )
}

fn xfrm(rect: Rect) -> String {
    format!(
        r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        rect.x, rect.y, rect.cx, rect.cy
    )
}

fn placeholder_shape(id: u32, name: &str, ph_attrs: &str, rect: Rect, paragraphs: &[String]) -> String {
    let body = if paragraphs.is_empty() {
        r#"<a:p><a:endParaRPr lang="en-US"/></a:p>"#.to_string()
    } else {
        paragraphs.concat()
    };

    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="{}"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph {}/></p:nvPr></p:nvSpPr><p:spPr>{}</p:spPr><p:txBody><a:bodyPr/><a:lstStyle/>{}</p:txBody></p:sp>"#,
        id,
        name,
        ph_attrs,
        xfrm(rect),
        body
    )
}

fn text_paragraph(text: &str) -> String {
    format!(
        r#"<a:p><a:r><a:rPr lang="en-US"/><a:t>{}</a:t></a:r></a:p>"#,
        escape(text)
    )
}

fn bullet_paragraph(text: &str) -> String {
    format!(
        r#"<a:p><a:pPr marL="342900" indent="-342900"><a:buFont typeface="Arial"/><a:buChar char="&#8226;"/></a:pPr><a:r><a:rPr lang="en-US"/><a:t>{}</a:t></a:r></a:p>"#,
        escape(text)
    )
}

fn code_shape(id: u32, layout: &CodeBlockLayout) -> String {
    let size = layout.font_size * 100;
    let paragraphs: String = layout
        .lines
        .iter()
        .map(|line| {
            format!(
                r#"<a:p><a:pPr><a:lnSpc><a:spcPct val="110000"/></a:lnSpc><a:spcAft><a:spcPts val="0"/></a:spcAft><a:buNone/></a:pPr><a:r><a:rPr lang="en-US" sz="{}"><a:latin typeface="{}"/></a:rPr><a:t>{}</a:t></a:r></a:p>"#,
                size,
                layout.font_family(),
                escape(line.as_str())
            )
        })
        .collect();

    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="Code {}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr>{}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr><p:txBody><a:bodyPr wrap="square"/><a:lstStyle/>{}</p:txBody></p:sp>"#,
        id,
        id - 1,
        xfrm(CODE_RECT),
        paragraphs
    )
}
