use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Cursor;
use time::macros::format_description;
use time::OffsetDateTime;

use super::constants::*;
use super::error::ScheduleError;
use super::parser::ParsedFileResult;

const INDENT_SIZE: usize = 2;

// Elements left open by ScheduleWriter::new, innermost last
const OPEN_ELEMENTS: [&str; 6] = ["keylab", "project", "samples", "sample", "test", "stages"];

/// Writes a KeyLAB schedule document into an in-memory buffer.
///
/// The header (test definitions down to the `stages` element) is written on creation,
/// stages are appended one at a time, and `close` finishes the document.
// Structure
// keylab - xmlns, content, timestamp
// |---- test-definitions
// |    |---- test-definition - name, code
// |    |    |---- properties
// |    |    |    |---- property - name, unit
// |---- project - id, name
// |    |---- samples
// |    |    |---- sample - id
// |    |    |    |---- test - code, specimen
// |    |    |    |    |---- stages
// |    |    |    |    |    |---- stage - number
// |    |    |    |    |    |    |---- parameters
// |    |    |    |    |    |    |    |---- parameter - name, value
pub struct ScheduleWriter {
    writer: Writer<Cursor<Vec<u8>>>,
    stage_count: usize,
}

impl ScheduleWriter {
    /// Start a schedule generated at the given timestamp
    pub fn new(timestamp: &str) -> Result<Self, ScheduleError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', INDENT_SIZE);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        let keylab = BytesStart::new("keylab").with_attributes([
            ("xmlns", KEYLAB_NAMESPACE),
            ("content", KEYLAB_CONTENT),
            ("timestamp", timestamp),
        ]);
        writer.write_event(Event::Start(keylab))?;

        writer.write_event(Event::Start(BytesStart::new("test-definitions")))?;
        let definition = BytesStart::new("test-definition")
            .with_attributes([("name", TEST_NAME), ("code", TEST_CODE)]);
        writer.write_event(Event::Start(definition))?;
        writer.write_event(Event::Start(BytesStart::new("properties")))?;
        for property in TEST_PROPERTIES {
            let element =
                BytesStart::new("property").with_attributes([("name", property), ("unit", "")]);
            writer.write_event(Event::Empty(element))?;
        }
        writer.write_event(Event::End(BytesEnd::new("properties")))?;
        writer.write_event(Event::End(BytesEnd::new("test-definition")))?;
        writer.write_event(Event::End(BytesEnd::new("test-definitions")))?;

        let project = BytesStart::new("project")
            .with_attributes([("id", UNKNOWN_ID), ("name", UNKNOWN_ID)]);
        writer.write_event(Event::Start(project))?;
        writer.write_event(Event::Start(BytesStart::new("samples")))?;
        let sample = BytesStart::new("sample").with_attributes([("id", UNKNOWN_ID)]);
        writer.write_event(Event::Start(sample))?;
        let test =
            BytesStart::new("test").with_attributes([("code", TEST_CODE), ("specimen", SPECIMEN)]);
        writer.write_event(Event::Start(test))?;
        writer.write_event(Event::Start(BytesStart::new("stages")))?;

        Ok(Self {
            writer,
            stage_count: 0,
        })
    }

    /// Append the next stage. Stages are numbered from 1 in the order they are written.
    pub fn write_stage(&mut self, result: &ParsedFileResult) -> Result<(), ScheduleError> {
        self.stage_count += 1;
        let number = self.stage_count.to_string();
        let stage = BytesStart::new("stage").with_attributes([("number", number.as_str())]);
        self.writer.write_event(Event::Start(stage))?;

        if result.is_empty() {
            self.writer
                .write_event(Event::Empty(BytesStart::new("parameters")))?;
        } else {
            self.writer
                .write_event(Event::Start(BytesStart::new("parameters")))?;
            for (name, value) in result.parameters() {
                let parameter = BytesStart::new("parameter")
                    .with_attributes([("name", name), ("value", value.as_str())]);
                self.writer.write_event(Event::Empty(parameter))?;
            }
            self.writer
                .write_event(Event::End(BytesEnd::new("parameters")))?;
        }

        self.writer.write_event(Event::End(BytesEnd::new("stage")))?;
        Ok(())
    }

    /// Close all open elements and return the document
    pub fn close(mut self) -> Result<Vec<u8>, ScheduleError> {
        for name in OPEN_ELEMENTS.iter().rev() {
            self.writer.write_event(Event::End(BytesEnd::new(*name)))?;
        }
        let mut buffer = self.writer.into_inner().into_inner();
        buffer.push(b'\n');
        Ok(buffer)
    }
}

/// Format a generation time the way KeyLAB expects (local time, no offset)
pub fn format_timestamp(timestamp: OffsetDateTime) -> Result<String, ScheduleError> {
    Ok(timestamp.format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second]"
    ))?)
}

fn local_now() -> OffsetDateTime {
    match OffsetDateTime::now_local() {
        Ok(now) => now,
        Err(e) => {
            log::warn!("Could not determine the local time offset ({e}), using UTC");
            OffsetDateTime::now_utc()
        }
    }
}

/// Serialize parsed results into a schedule document, one stage per result in order
pub fn generate_xml_at(
    results: &[ParsedFileResult],
    timestamp: OffsetDateTime,
) -> Result<Vec<u8>, ScheduleError> {
    let mut writer = ScheduleWriter::new(&format_timestamp(timestamp)?)?;
    for result in results {
        writer.write_stage(result)?;
    }
    writer.close()
}

/// Serialize parsed results into a schedule document stamped with the current time
pub fn generate_xml(results: &[ParsedFileResult]) -> Result<Vec<u8>, ScheduleError> {
    generate_xml_at(results, local_now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;
    use quick_xml::Reader;
    use time::macros::datetime;

    /// An element as (name, [(attribute, value)])
    type Element = (String, Vec<(String, String)>);

    fn collect_elements(xml: &[u8]) -> Vec<Element> {
        let mut reader = Reader::from_reader(xml);
        reader.trim_text(true);
        let mut buf = Vec::new();
        let mut elements = Vec::new();
        loop {
            match reader.read_event_into(&mut buf).unwrap() {
                Event::Start(e) | Event::Empty(e) => {
                    let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                    let attrs = e
                        .attributes()
                        .map(|a| {
                            let a = a.unwrap();
                            (
                                String::from_utf8(a.key.as_ref().to_vec()).unwrap(),
                                a.unescape_value().unwrap().into_owned(),
                            )
                        })
                        .collect();
                    elements.push((name, attrs));
                }
                Event::Eof => break,
                _ => (),
            }
            buf.clear();
        }
        elements
    }

    fn attr<'a>(element: &'a Element, key: &str) -> Option<&'a str> {
        element
            .1
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn results() -> Vec<ParsedFileResult> {
        vec![
            parse_str("DAT01234500110005DAT01200000120000\n").unwrap(),
            parse_str("").unwrap(),
            parse_str("DAT00999900000001").unwrap(),
        ]
    }

    #[test]
    fn test_header() {
        let xml = generate_xml_at(&results(), datetime!(2024-03-05 14:07:09 UTC)).unwrap();
        let text = String::from_utf8(xml.clone()).unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));

        let elements = collect_elements(&xml);
        let root = &elements[0];
        assert_eq!(root.0, "keylab");
        assert_eq!(attr(root, "xmlns"), Some(KEYLAB_NAMESPACE));
        assert_eq!(attr(root, "content"), Some("schedule"));
        assert_eq!(attr(root, "timestamp"), Some("2024-03-05T14:07:09"));

        let definition = elements.iter().find(|e| e.0 == "test-definition").unwrap();
        assert_eq!(attr(definition, "name"), Some(TEST_NAME));
        assert_eq!(attr(definition, "code"), Some(TEST_CODE));

        let properties: Vec<&Element> = elements.iter().filter(|e| e.0 == "property").collect();
        assert_eq!(properties.len(), 2);
        assert_eq!(attr(properties[0], "name"), Some(MINUTES_PARAMETER));
        assert_eq!(attr(properties[1], "name"), Some(DIVE_PARAMETER));
        assert!(properties.iter().all(|p| attr(p, "unit") == Some("")));

        let project = elements.iter().find(|e| e.0 == "project").unwrap();
        assert_eq!(attr(project, "id"), Some("Unknown"));
        assert_eq!(attr(project, "name"), Some("Unknown"));
        let sample = elements.iter().find(|e| e.0 == "sample").unwrap();
        assert_eq!(attr(sample, "id"), Some("Unknown"));
        let test = elements.iter().find(|e| e.0 == "test").unwrap();
        assert_eq!(attr(test, "code"), Some(TEST_CODE));
        assert_eq!(attr(test, "specimen"), Some("1"));
    }

    #[test]
    fn test_stages_in_order() {
        let xml = generate_xml_at(&results(), datetime!(2024-03-05 14:07:09 UTC)).unwrap();
        let elements = collect_elements(&xml);

        let mut stages: Vec<(String, Vec<(String, String)>)> = Vec::new();
        for (name, attrs) in elements {
            if name == "stage" {
                let number = attrs[0].1.clone();
                stages.push((number, Vec::new()));
            } else if name == "parameter" {
                let stage = stages.last_mut().unwrap();
                stage.1.push((attrs[0].1.clone(), attrs[1].1.clone()));
            }
        }

        let numbers: Vec<&str> = stages.iter().map(|s| s.0.as_str()).collect();
        assert_eq!(numbers, vec!["1", "2", "3"]);

        let dive = DIVE_PARAMETER.to_string();
        let mins = MINUTES_PARAMETER.to_string();
        assert_eq!(
            stages[0].1,
            vec![
                (dive.clone(), String::from("12345")),
                (dive.clone(), String::from("12000")),
                (mins.clone(), String::from("6600.5")),
                (mins.clone(), String::from("7200.0")),
            ]
        );
        assert!(stages[1].1.is_empty());
        assert_eq!(
            stages[2].1,
            vec![
                (dive, String::from("9999")),
                (mins, String::from("0.1")),
            ]
        );
    }

    #[test]
    fn test_no_results() {
        let xml = generate_xml(&[]).unwrap();
        let elements = collect_elements(&xml);
        assert!(elements.iter().any(|e| e.0 == "stages"));
        assert!(!elements.iter().any(|e| e.0 == "stage"));
    }

    #[test]
    fn test_timestamp_shape() {
        let xml = generate_xml(&results()).unwrap();
        let elements = collect_elements(&xml);
        let timestamp = attr(&elements[0], "timestamp").unwrap();
        assert_eq!(timestamp.len(), "YYYY-MM-DDTHH:MM:SS".len());
        assert_eq!(&timestamp[10..11], "T");
        assert!(timestamp
            .chars()
            .enumerate()
            .all(|(i, c)| matches!(i, 4 | 7 | 10 | 13 | 16) || c.is_ascii_digit()));
    }

    #[test]
    fn test_format_timestamp() {
        let stamp = format_timestamp(datetime!(2023-11-30 08:00:59 -5)).unwrap();
        assert_eq!(stamp, "2023-11-30T08:00:59");
    }
}
