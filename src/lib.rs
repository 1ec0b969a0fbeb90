use log::debug;
use regex::Regex;
use std::{
    error::Error,
    fmt::Display,
    fs::File,
    io::{self, Read, Write},
};

/// Four measurements plus the species label.
const FIELD_COUNT: usize = 5;

#[derive(Debug, Clone)]
pub struct MalformedRecordError {
    record: usize,
    fields: usize,
}

impl Error for MalformedRecordError {}
impl Display for MalformedRecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "record {} has {} fields, expected {}",
            self.record, self.fields, FIELD_COUNT
        )
    }
}

/// Turns a species label into its class name: the text after the last
/// hyphen, title-cased.
/// ```
/// use iris_converter_lib::class_name;
/// assert_eq!(class_name("Iris-setosa"), "Setosa");
/// assert_eq!(class_name("virginica"), "Virginica");
/// ```
pub fn class_name(label: &str) -> String {
    let tail = Regex::new(r"[^-]*$").unwrap();
    tail_class(label, &tail)
}

fn tail_class(label: &str, tail: &Regex) -> String {
    // `[^-]*$` always matches, worst case the empty string at the end
    let segment = tail.find(label).map_or("", |m| m.as_str());
    title_case(segment)
}

/// Uppercases the first letter of each whitespace-separated word and
/// lowercases the rest, leaving the whitespace itself untouched.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            word_start = true;
            out.push(ch);
        } else if word_start {
            out.extend(ch.to_uppercase());
            word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Reads comma-separated iris records from `input` and writes one Dhall
/// record literal per record to `out`, in input order. Returns the number
/// of lines written.
/// ```
/// use iris_converter_lib::convert;
/// let mut out = Vec::new();
/// convert("5.1,3.5,1.4,0.2,Iris-setosa".as_bytes(), &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("class = Setosa"));
/// ```
pub fn convert<R: Read, W: Write>(input: R, out: &mut W) -> Result<usize, Box<dyn Error>> {
    let tail = Regex::new(r"[^-]*$").unwrap();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut written = 0;
    for (n, record) in rdr.records().enumerate() {
        let row = record?;
        writeln!(out, "{}", render(&row, &tail, n + 1)?)?;
        written += 1;
    }
    debug!("converted {written} records");
    Ok(written)
}

fn render(
    row: &csv::StringRecord,
    tail: &Regex,
    record: usize,
) -> Result<String, MalformedRecordError> {
    if row.len() < FIELD_COUNT {
        return Err(MalformedRecordError {
            record,
            fields: row.len(),
        });
    }
    // the label is always the last field; measurements pass through as text
    let class = tail_class(&row[row.len() - 1], tail);
    Ok(format!(
        ", {{ sepal = {{ length = Length.centimeters {}, width = Length.centimeters {} }}, petal = {{ length = Length.centimeters {}, width = Length.centimeters {} }}, class = {} }}",
        &row[0], &row[1], &row[2], &row[3], class
    ))
}

/// Opens `source` and prints the converted records to stdout.
pub fn run_iris(source: &str) -> Result<usize, Box<dyn Error>> {
    let file = File::open(source)?;
    let stdout = io::stdout();
    convert(file, &mut stdout.lock())
}
