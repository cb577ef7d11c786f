// Benchmark helpers shared by the files in this directory; each bench only
// uses some of them.
#[allow(dead_code)]
pub fn generate_rtf_document(paragraphs: usize) -> String {
    let block = concat!(
        "\\par \\pard\\plain {\\rtlch \\ltrch\\loch Plain text with }{\\b\\ab\\rtlch \\ltrch\\loch bold}\n",
        "\\par \\pard\\plain {\\listtext\\pard\\plain \\'3f\\tab}\\ilvl0\\ls2 {\\rtlch \\ltrch\\loch Item}\n",
        "\\par \\pard\\plain {\\listtext\\pard\\plain \\'3f\\tab}\\ilvl1\\ls2 {\\rtlch \\ltrch\\loch Nested\\tab item}\n",
        "\\par \\pard\\plain {\\i\\ai\\rtlch \\ltrch\\loch After the list}\n",
        "\\par \\pard\\plain {\\rtlch \\ltrch\\loch\n}\n",
    );
    format!("{{\\rtf1\\ansi\n{}}}", block.repeat(paragraphs))
}

#[allow(dead_code)]
pub fn generate_sectioned_export(sections: usize, paragraphs: usize) -> String {
    let mut content = String::from("Exported notes\n");
    for section in 0..sections {
        content.push_str(&format!("---- {section} ----\n"));
        content.push_str(&generate_rtf_document(paragraphs));
        content.push('\n');
    }
    content.push_str("---- end ----\n");
    content
}
