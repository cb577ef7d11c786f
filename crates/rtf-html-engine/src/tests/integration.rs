//! End-to-end: file on disk through `Converter` to fragments on disk.

use pretty_assertions::assert_eq;

use super::{create_test_dir, create_test_file};
use crate::io::{read_source, write_fragments};
use crate::{Converter, ConverterOptions};

const SECTIONED: &str = concat!(
    "header text\n",
    "==== note 1 ====\n",
    "{\\rtf1 \\par \\pard\\plain {\\b\\ab\\rtlch \\ltrch\\loch Hello}}\n",
    "==== note 2 ====\n",
    "{\\rtf1 \\par \\pard\\plain {\\rtlch \\ltrch\\loch World}}\n",
    "==== end ====\n",
    "trailer\n",
);

#[test]
fn sectioned_file_converts_to_fragments_file() {
    let dir = create_test_dir();
    let input = create_test_file(&dir, "notes.rtf", SECTIONED);
    let output = dir.path().join("html").join("notes.html");

    let converter = Converter::new(ConverterOptions {
        section_delimiter: Some("====".into()),
        ..ConverterOptions::default()
    });
    let source = read_source(&input).unwrap();
    let fragments = converter.convert_source(&source).unwrap();
    write_fragments(&output, &fragments).unwrap();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "<span class=\"rtf-bold\"> Hello</span>\n\n<span> World</span>"
    );
}

#[test]
fn whole_file_is_one_chunk_without_delimiter() {
    let dir = create_test_dir();
    let input = create_test_file(&dir, "notes.rtf", SECTIONED);

    let source = read_source(&input).unwrap();
    let fragments = Converter::default().convert_source(&source).unwrap();

    assert_eq!(fragments.len(), 1);
    assert_eq!(
        fragments[0],
        "<span class=\"rtf-bold\"> Hello</span><br>\n<span> World</span>"
    );
}

#[test]
fn chunks_do_not_share_list_state() {
    let open_list = "\\par \\pard\\plain {\\listtext\\pard\\plain 1.\\tab}\\ilvl0\\ls1 {\\rtlch \\ltrch\\loch One}";
    let plain = "\\par \\pard\\plain {\\rtlch \\ltrch\\loch Two}";

    let fragments = Converter::default().convert([open_list, plain]);

    assert_eq!(
        fragments,
        vec![
            "\n<ol>\n<li> One</li>\n</ol>\n".to_string(),
            "<span> Two</span>".to_string(),
        ]
    );
}
