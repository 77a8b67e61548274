//! End-to-end tests for layout extraction and rendering

use pdfgrid::parser::{decode_show_text, parse_page, parse_page_bytes};
use pdfgrid::source::load_content_stream;
use pdfgrid::{Format, Page, ParseMode, RenderConfig, TextExtractor};
use pretty_assertions::assert_eq;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

fn lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

#[test]
fn test_placement_example_maps_to_column_17() {
    let page = Page::new(1, 100.0, 100.0, lines(&["1 0 0 1 10 20 Tm", "(Hello) Tj"]));
    let layouts = TextExtractor::new().extract(&[page], &RenderConfig::default());

    assert_eq!(layouts.len(), 1);
    assert_eq!(layouts[0].elements.len(), 1);
    let element = &layouts[0].elements[0];
    assert_eq!((element.x0, element.y0), (10.0, 20.0));
    assert_eq!(element.text, "Hello");
    assert_eq!(element.x, 17);
}

#[test]
fn test_bytes_example() {
    let page = Page::letter(1, lines(&["<48656C6C6F> Tj", "ET", "<576F726C64> Tj"]));
    let layout = parse_page_bytes(&page);
    let cells: Vec<(&str, i64, i64)> = layout
        .elements
        .iter()
        .map(|e| (e.text.as_str(), e.x, e.y))
        .collect();
    assert_eq!(cells, vec![("Hello", 0, 0), ("World", 0, 1)]);
}

#[test]
fn test_letter_page_renders_like_the_source() {
    let stream = "\
BT
/F1 18 Tf
1 0 0 1 72 720 Tm
(Quarterly Report) Tj
/F1 10 Tf
1 0 0 1 72 680 Tm
(Revenue) Tj
1 0 0 1 400 680 Tm
[(1)-20(,204)] TJ
1 0 0 1 72 660 Tm
(Costs) Tj
1 0 0 1 400 660 Tm
(988) Tj
ET
";
    let pages = load_content_stream(stream.as_bytes(), 612.0, 792.0).unwrap();
    let config = RenderConfig {
        width: 40,
        height: 20,
        ..Default::default()
    };
    let layouts = TextExtractor::new().extract(&pages, &config);
    let rendered = config.render_to_string(&layouts);

    // 72/612*40 = 4.7 -> column 5, 400/612*40 = 26.1 -> column 27
    // (792-720)/792*20 = 1.8 -> row 1, 680 -> row 2, 660 -> row 3
    let expected = [
        "                                        ",
        "     Quarterly Report                   ",
        "     Revenue               1,204        ",
        "     Costs                 988",
    ]
    .join("\n")
        + "\n";
    assert_eq!(rendered, expected);
}

#[test]
fn test_detection_switches_all_pages_to_bytes() {
    let pages = vec![
        Page::letter(1, lines(&["1 0 0 1 10 20 Tm", "(Literal) Tj"])),
        Page::letter(2, lines(&["<4869> Tj"])),
    ];
    let extractor = TextExtractor::new();
    assert_eq!(extractor.resolve_format(&pages), Format::Bytes);

    let layouts = extractor.extract(&pages, &RenderConfig::default());
    assert!(layouts[0].is_empty());
    assert_eq!(layouts[1].elements[0].text, "Hi");
}

#[test]
fn test_forced_mode_overrides_detection() {
    let pages = vec![Page::letter(1, lines(&["1 0 0 1 10 20 Tm", "<4869> Tj"]))];
    let extractor = TextExtractor::with_options(pdfgrid::ExtractionOptions {
        mode: ParseMode::Positioned,
    });
    let layouts = extractor.extract(&pages, &RenderConfig::default());
    assert_eq!(layouts[0].format, Format::Positioned);
    assert_eq!((layouts[0].elements[0].x0, layouts[0].elements[0].y0), (10.0, 20.0));
}

#[test]
fn test_empty_page_renders_single_newline() {
    let pages = vec![Page::letter(1, lines(&["BT", "ET"]))];
    let config = RenderConfig::default();
    let layouts = TextExtractor::new().extract(&pages, &config);
    assert_eq!(config.render_to_string(&layouts), "\n");
}

#[test]
fn test_decode_failure_does_not_abort_page() {
    let page = Page::letter(
        1,
        lines(&[
            "1 0 0 1 10 20 Tm",
            "<ZZ> Tj",
            "1 0 0 1 30 40 Tm",
            "(H\u{e9}llo) Tj",
            "1 0 0 1 50 60 Tm",
            "(Fine) Tj",
        ]),
    );
    let layout = parse_page(&page);
    assert_eq!(layout.elements.len(), 1);
    assert_eq!(layout.elements[0].text, "Fine");
    assert!(decode_show_text("(H\u{e9}llo) Tj").is_err());
}

#[test]
fn test_off_page_placements_render_without_overflow() {
    let page = Page::letter(
        1,
        lines(&[
            "1 0 0 1 1e300 20 Tm",
            "(x) Tj",
            "1 0 0 1 -1e300 700 Tm",
            "(a) Tj",
            "1 0 0 1 300 700 Tm",
            "(b) Tj",
            "1 0 0 1 10 -1e300 Tm",
            "(y) Tj",
        ]),
    );
    let config = RenderConfig {
        width: 10,
        height: 4,
        ..Default::default()
    };
    let layouts = TextExtractor::new().extract(&[page], &config);
    let cells: Vec<(&str, i64, i64)> = layouts[0]
        .elements
        .iter()
        .map(|e| (e.text.as_str(), e.x, e.y))
        .collect();
    assert_eq!(
        cells,
        vec![("a", -9, 0), ("b", 5, 0), ("x", 21, 3), ("y", 1, 8)]
    );

    let expected = format!("a{}b    \n{}x\n y\n", " ".repeat(13), " ".repeat(21));
    assert_eq!(config.render_to_string(&layouts), expected);

    let fitted = RenderConfig { fit: true, ..config };
    let page = Page::letter(1, lines(&["1 0 0 1 1e300 20 Tm", "(x) Tj"]));
    let layouts = TextExtractor::new().extract(&[page], &fitted);
    assert_eq!(layouts[0].elements[0].x, 9);
}

/// Collects formatted log output in memory
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_non_ascii_line_logs_one_diagnostic() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();

    let page = Page::letter(1, lines(&["(H\u{e9}llo) Tj"]));
    let layout = tracing::subscriber::with_default(subscriber, || parse_page(&page));

    assert!(layout.is_empty());
    let output = logs.contents();
    assert_eq!(output.lines().count(), 1, "unexpected log output: {output}");
    assert!(output.contains("parsetext: no matches"));
}
