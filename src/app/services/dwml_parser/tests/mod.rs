//! Test utilities for DWML parser testing
//!
//! Builders for small DWML documents, used by the parser tests and by the
//! other service tests that start from XML.

use crate::app::services::dwml_parser::Element;


/// Render a `data/time-layout` block
pub fn time_layout_xml(key: &str, start_times: &[&str]) -> String {
    let times: String = start_times
        .iter()
        .map(|time| format!("      <start-valid-time>{}</start-valid-time>\n", time))
        .collect();
    format!(
        "    <time-layout time-coordinate=\"local\" summarization=\"none\">\n\
         \x20     <layout-key>{}</layout-key>\n{}    </time-layout>\n",
        key, times
    )
}

/// Render one parameter element; a `None` value is written as a nil sample
pub fn parameter_xml(tag: &str, layout_key: &str, values: &[Option<i32>]) -> String {
    let values: String = values
        .iter()
        .map(|value| match value {
            Some(value) => format!("        <value>{}</value>\n", value),
            None => "        <value xsi:nil=\"true\"/>\n".to_string(),
        })
        .collect();
    format!(
        "      <{tag} type=\"hourly\" units=\"x\" time-layout=\"{layout_key}\">\n\
         \x20       <name>{tag}</name>\n{values}      </{tag}>\n"
    )
}

/// Wrap layout and parameter blocks into a complete document
pub fn dwml_document(layouts: &[String], parameters: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\"?>\n\
         <dwml version=\"1.0\" xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\n\
         \x20 <head><product>time-series</product></head>\n\
         \x20 <data>\n{}    <parameters applicable-location=\"point1\">\n{}    </parameters>\n\
         \x20 </data>\n</dwml>\n",
        layouts.concat(),
        parameters.concat()
    )
}

/// Wrap values into `Some`
pub fn values(raw: &[i32]) -> Vec<Option<i32>> {
    raw.iter().copied().map(Some).collect()
}

/// Two-layout document with six distinct start times: precipitation at
/// 06:00 and 18:00, temperature and wind every 3 hours from 07:00 to 16:00
pub fn create_two_layout_document() -> String {
    dwml_document(
        &[
            time_layout_xml(
                "k-p12h-n2-1",
                &["2015-01-13T06:00:00-05:00", "2015-01-13T18:00:00-05:00"],
            ),
            time_layout_xml(
                "k-p3h-n4-2",
                &[
                    "2015-01-13T07:00:00-05:00",
                    "2015-01-13T10:00:00-05:00",
                    "2015-01-13T13:00:00-05:00",
                    "2015-01-13T16:00:00-05:00",
                ],
            ),
        ],
        &[
            parameter_xml("probability-of-precipitation", "k-p12h-n2-1", &values(&[10, 40])),
            parameter_xml("temperature", "k-p3h-n4-2", &values(&[50, 55, 60, 65])),
            parameter_xml("wind-speed", "k-p3h-n4-2", &values(&[5, 6, 7, 8])),
        ],
    )
}

/// Parse a document built by the helpers above
pub fn parse(xml: &str) -> Element {
    Element::parse_str(xml).unwrap()
}
