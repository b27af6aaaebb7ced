//! Fixed package parts: content types, relationships, master, layouts, theme.
//!
//! Slides carry their own shape geometry, so the master and layouts only
//! need to exist and name their layout type.

use slides_core::SlideLayout;

pub const NS_PRESENTATION: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
pub const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub const NS_PACKAGE_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

const CT_SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
const CT_SLIDE_LAYOUT: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";

pub const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Slide size in EMU (10" x 7.5").
pub const SLIDE_WIDTH_EMU: i64 = 9_144_000;
pub const SLIDE_HEIGHT_EMU: i64 = 6_858_000;

/// EMU per point.
pub const EMU_PER_POINT: i64 = 12_700;

/// Layouts in the order they are written (layout N is `LAYOUTS[N - 1]`).
pub const LAYOUTS: [SlideLayout; 3] = [
    SlideLayout::Title,
    SlideLayout::SectionHeader,
    SlideLayout::TitleAndBody,
];

/// 1-based layout part number for a slide layout.
pub fn layout_number(layout: SlideLayout) -> usize {
    match layout {
        SlideLayout::Title => 1,
        SlideLayout::SectionHeader => 2,
        SlideLayout::TitleAndBody => 3,
    }
}

/// `[Content_Types].xml`
pub fn content_types(slide_count: usize) -> String {
    let mut content = format!(
        r#"{}
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
  <Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
  <Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
"#,
        XML_DECL
    );

    for n in 1..=LAYOUTS.len() {
        content.push_str(&format!(
            "  <Override PartName=\"/ppt/slideLayouts/slideLayout{}.xml\" ContentType=\"{}\"/>\n",
            n, CT_SLIDE_LAYOUT
        ));
    }
    for n in 1..=slide_count {
        content.push_str(&format!(
            "  <Override PartName=\"/ppt/slides/slide{}.xml\" ContentType=\"{}\"/>\n",
            n, CT_SLIDE
        ));
    }

    content.push_str("</Types>");
    content
}

/// `_rels/.rels`
pub fn root_rels() -> String {
    format!(
        r#"{}
<Relationships xmlns="{}">
  <Relationship Id="rId1" Type="{}" Target="ppt/presentation.xml"/>
</Relationships>"#,
        XML_DECL, NS_PACKAGE_RELATIONSHIPS, REL_OFFICE_DOCUMENT
    )
}

/// `ppt/presentation.xml`. Slides are relationships `rId3` onwards.
pub fn presentation(slide_count: usize) -> String {
    let slide_ids: String = (0..slide_count)
        .map(|i| format!("<p:sldId id=\"{}\" r:id=\"rId{}\"/>", 256 + i, i + 3))
        .collect();

    format!(
        r#"{}
<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">
  <p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>
  <p:sldIdLst>{}</p:sldIdLst>
  <p:sldSz cx="{}" cy="{}" type="screen4x3"/>
  <p:notesSz cx="{}" cy="{}"/>
</p:presentation>"#,
        XML_DECL,
        NS_DRAWING,
        NS_RELATIONSHIPS,
        NS_PRESENTATION,
        slide_ids,
        SLIDE_WIDTH_EMU,
        SLIDE_HEIGHT_EMU,
        SLIDE_HEIGHT_EMU,
        SLIDE_WIDTH_EMU
    )
}

/// `ppt/_rels/presentation.xml.rels`
pub fn presentation_rels(slide_count: usize) -> String {
    let mut content = format!(
        r#"{}
<Relationships xmlns="{}">
  <Relationship Id="rId1" Type="{}" Target="slideMasters/slideMaster1.xml"/>
  <Relationship Id="rId2" Type="{}" Target="theme/theme1.xml"/>
"#,
        XML_DECL, NS_PACKAGE_RELATIONSHIPS, REL_SLIDE_MASTER, REL_THEME
    );

    for n in 1..=slide_count {
        content.push_str(&format!(
            "  <Relationship Id=\"rId{}\" Type=\"{}\" Target=\"slides/slide{}.xml\"/>\n",
            n + 2,
            REL_SLIDE,
            n
        ));
    }

    content.push_str("</Relationships>");
    content
}

/// Group shape header every shape tree starts with.
pub const SHAPE_TREE_HEADER: &str = r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>"#;

/// `ppt/slideMasters/slideMaster1.xml`
pub fn slide_master() -> String {
    let layout_ids: String = (1..=LAYOUTS.len())
        .map(|n| format!("<p:sldLayoutId id=\"{}\" r:id=\"rId{}\"/>", 2_147_483_648u64 + n as u64, n))
        .collect();

    format!(
        r#"{}
<p:sldMaster xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">
  <p:cSld>
    <p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>
    <p:spTree>{}</p:spTree>
  </p:cSld>
  <p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
  <p:sldLayoutIdLst>{}</p:sldLayoutIdLst>
</p:sldMaster>"#,
        XML_DECL, NS_DRAWING, NS_RELATIONSHIPS, NS_PRESENTATION, SHAPE_TREE_HEADER, layout_ids
    )
}

/// `ppt/slideMasters/_rels/slideMaster1.xml.rels`: layouts, then the theme.
pub fn slide_master_rels() -> String {
    let mut content = format!(
        "{}\n<Relationships xmlns=\"{}\">\n",
        XML_DECL, NS_PACKAGE_RELATIONSHIPS
    );
    for n in 1..=LAYOUTS.len() {
        content.push_str(&format!(
            "  <Relationship Id=\"rId{}\" Type=\"{}\" Target=\"../slideLayouts/slideLayout{}.xml\"/>\n",
            n, REL_SLIDE_LAYOUT, n
        ));
    }
    content.push_str(&format!(
        "  <Relationship Id=\"rId{}\" Type=\"{}\" Target=\"../theme/theme1.xml\"/>\n",
        LAYOUTS.len() + 1,
        REL_THEME
    ));
    content.push_str("</Relationships>");
    content
}

/// `ppt/slideLayouts/slideLayoutN.xml`
pub fn slide_layout(layout: SlideLayout) -> String {
    let (layout_type, name) = match layout {
        SlideLayout::Title => ("title", "Title Slide"),
        SlideLayout::SectionHeader => ("secHead", "Section Header"),
        SlideLayout::TitleAndBody => ("obj", "Title and Content"),
    };

    format!(
        r#"{}
<p:sldLayout xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" type="{}" preserve="1">
  <p:cSld name="{}"><p:spTree>{}</p:spTree></p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>"#,
        XML_DECL,
        NS_DRAWING,
        NS_RELATIONSHIPS,
        NS_PRESENTATION,
        layout_type,
        name,
        SHAPE_TREE_HEADER
    )
}

/// `ppt/slideLayouts/_rels/slideLayoutN.xml.rels`
pub fn slide_layout_rels() -> String {
    format!(
        r#"{}
<Relationships xmlns="{}">
  <Relationship Id="rId1" Type="{}" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>"#,
        XML_DECL, NS_PACKAGE_RELATIONSHIPS, REL_SLIDE_MASTER
    )
}

/// `ppt/slides/_rels/slideN.xml.rels`
pub fn slide_rels(layout: SlideLayout) -> String {
    format!(
        r#"{}
<Relationships xmlns="{}">
  <Relationship Id="rId1" Type="{}" Target="../slideLayouts/slideLayout{}.xml"/>
</Relationships>"#,
        XML_DECL,
        NS_PACKAGE_RELATIONSHIPS,
        REL_SLIDE_LAYOUT,
        layout_number(layout)
    )
}

/// `ppt/theme/theme1.xml`
pub fn theme() -> String {
    let fill = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    let fills = fill.repeat(3);
    let lines: String = [6350, 12700, 19050]
        .iter()
        .map(|w| format!("<a:ln w=\"{}\">{}</a:ln>", w, fill))
        .collect();
    let effects = "<a:effectStyle><a:effectLst/></a:effectStyle>".repeat(3);

    format!(
        r#"{}
<a:theme xmlns:a="{}" name="Outline Slides">
  <a:themeElements>
    <a:clrScheme name="Office">
      <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
      <a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
      <a:dk2><a:srgbClr val="44546A"/></a:dk2>
      <a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>
      <a:accent1><a:srgbClr val="4472C4"/></a:accent1>
      <a:accent2><a:srgbClr val="ED7D31"/></a:accent2>
      <a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>
      <a:accent4><a:srgbClr val="FFC000"/></a:accent4>
      <a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>
      <a:accent6><a:srgbClr val="70AD47"/></a:accent6>
      <a:hlink><a:srgbClr val="0563C1"/></a:hlink>
      <a:folHlink><a:srgbClr val="954F72"/></a:folHlink>
    </a:clrScheme>
    <a:fontScheme name="Office">
      <a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>
      <a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>
    </a:fontScheme>
    <a:fmtScheme name="Office">
      <a:fillStyleLst>{}</a:fillStyleLst>
      <a:lnStyleLst>{}</a:lnStyleLst>
      <a:effectStyleLst>{}</a:effectStyleLst>
      <a:bgFillStyleLst>{}</a:bgFillStyleLst>
    </a:fmtScheme>
  </a:themeElements>
</a:theme>"#,
        XML_DECL, NS_DRAWING, fills, lines, effects, fills
    )
}
