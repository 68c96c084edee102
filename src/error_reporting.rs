use std::ops::Range;

use ariadne::{ColorGenerator, IndexType, Label, Report, ReportKind, Source};
use peg::{error::ParseError, str::LineCol};

use crate::regex::polish::PolishError;

#[derive(Debug, Clone)]
pub enum IErr {
    Io(String),
    Parser(ParseError<LineCol>),
    Polish(PolishError),
}

pub struct CSource {
    pub path: String,
    pub data: String,
}

pub struct CLabel {
    pub span: Range<usize>,
    pub msg: String,
}

pub fn label(span: Range<usize>, msg: impl AsRef<str>) -> CLabel {
    CLabel {
        span,
        msg: msg.as_ref().to_string(),
    }
}

fn report(
    src: &CSource,
    loc: usize,
    msg: impl AsRef<str>,
    labels: impl IntoIterator<Item = CLabel>,
) {
    let mut colors = ColorGenerator::new();
    let a = colors.next();
    let path = src.path.clone();
    let printed = Report::build(ReportKind::Error, (path.clone(), loc..loc))
        .with_config(ariadne::Config::default().with_index_type(IndexType::Byte))
        .with_message(msg.as_ref())
        .with_labels(labels.into_iter().map(|l| {
            Label::new((path.clone(), l.span))
                .with_message(l.msg)
                .with_color(a)
        }))
        .finish()
        .eprint((path.clone(), Source::from(src.data.as_str())));
    if printed.is_err() {
        eprintln!("{}", msg.as_ref());
    }
}

pub fn report_error(src_path: &str, src: &str, e: IErr) {
    let src = CSource {
        path: src_path.to_string(),
        data: src.to_string(),
    };

    match e {
        IErr::Io(msg) => {
            eprintln!("Error: {msg}");
        }
        IErr::Parser(e) => {
            let loc = e.location.offset;
            report(
                &src,
                loc,
                "Parsing failed",
                [label(loc..loc, format!("Expected {}", e.expected))],
            );
        }
        IErr::Polish(e) => {
            report(
                &src,
                e.span.start,
                "Parsing failed",
                [label(e.span.clone(), e.val.to_string())],
            );
        }
    }
}
