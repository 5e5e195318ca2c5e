//! End-to-end export tests: render, unpack the `.docx`, inspect `word/document.xml`

use std::io::{Cursor, Read};

use serde_json::{json, Value};

use launchpad_exports::{render, ArtifactType, Exporter, ValueProposition, CATALOG};

const TEAM: &str = "Team Ubuntu";

/// Main document part, as written into the archive
fn document_xml(bytes: &[u8]) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

/// Characters outside the XML 1.0 `Char` production
fn illegal_xml_chars(xml: &str) -> Vec<char> {
    xml.chars()
        .filter(|c| {
            matches!(c, '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}')
                || matches!(c, '\u{fffe}' | '\u{ffff}')
        })
        .collect()
}

/// Text of every `<w:t>` element in the main document part, in order
fn document_text(bytes: &[u8]) -> Vec<String> {
    let xml = document_xml(bytes);

    let mut texts = Vec::new();
    let mut rest = xml.as_str();
    while let Some(start) = rest.find("<w:t") {
        let after = &rest[start + 4..];
        if !(after.starts_with('>') || after.starts_with(' ')) {
            rest = after;
            continue;
        }
        let open_end = after.find('>').unwrap();
        if after[..open_end].ends_with('/') {
            texts.push(String::new());
            rest = &after[open_end + 1..];
            continue;
        }
        let body = &after[open_end + 1..];
        let close = body.find("</w:t>").unwrap();
        texts.push(unescape(&body[..close]));
        rest = &body[close..];
    }
    texts
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn export(artifact_type: &str, data: Value) -> Vec<String> {
    let bytes = render(artifact_type, &data, None, TEAM).unwrap();
    document_text(&bytes)
}

mod test_document_shell {
    use super::*;

    #[test]
    fn test_shell_precedes_blocks() {
        let bytes = Exporter::new("Incubator X")
            .export(
                &ArtifactType::from_tag("unknown_tool_xyz"),
                &json!({"foo": "bar"}),
                None,
                TEAM,
            )
            .unwrap()
            .bytes;
        let texts = document_text(&bytes);
        assert_eq!(
            &texts[..5],
            &["Incubator X", "Unknown Tool Xyz", TEAM, "foo", "bar"]
        );
    }
}

mod test_scenarios {
    use super::*;

    #[test]
    fn test_value_proposition_sentence() {
        let texts = export(
            "value_proposition",
            json!({
                "solution": "automated QC",
                "customer": "SME manufacturers",
                "benefit": "fewer defects",
                "how_it_works": "computer vision on the line",
                "improvement": "80% faster detection"
            }),
        );
        assert!(texts.iter().any(|t| t
            == "Our product automated QC helps SME manufacturers achieve fewer defects by \
                computer vision on the line, an improvement of 80% faster detection over \
                current options."));
    }

    #[test]
    fn test_financial_model_month12_total() {
        let texts = export(
            "financial_model",
            json!({
                "revenue_streams": [
                    {"name": "SaaS", "month12": "10000"},
                    {"name": "Services", "month12": "5000"}
                ]
            }),
        );

        // Revenue table: header, two rows, then the total row
        let total = texts.iter().position(|t| t == "Total").unwrap();
        let month12_total = &texts[total + 4];
        assert_eq!(month12_total, "R 15 000");
        assert!(texts.contains(&"R 10 000".to_string()));
        assert!(texts.contains(&"R 5 000".to_string()));
    }

    #[test]
    fn test_financial_model_ignores_stored_totals() {
        let texts = export(
            "financial_model",
            json!({
                "revenue_streams": [
                    {"name": "SaaS", "month12": 10000},
                    {"name": "Consulting", "month12": "n/a"}
                ],
                "totals": {"month12": 999999}
            }),
        );
        let total = texts.iter().position(|t| t == "Total").unwrap();
        assert_eq!(texts[total + 4], "R 10 000");
        assert!(!texts.iter().any(|t| t.contains("999")));
    }

    #[test]
    fn test_unknown_type_falls_back_to_generic() {
        let texts = export("unknown_tool_xyz", json!({"foo": "bar", "count": 5}));
        let foo = texts.iter().position(|t| t == "foo").unwrap();
        assert_eq!(texts[foo + 1], "bar");
        assert!(!texts.iter().any(|t| t == "count" || t == "5"));
    }

    #[test]
    fn test_compliance_checklist_item() {
        let texts = export(
            "compliance_checklist",
            json!({"items": {"cipc_registration": {"status": "complete", "notes": "Reg #123"}}}),
        );
        let heading = texts.iter().position(|t| t == "CIPC Registration").unwrap();
        assert_eq!(texts[heading + 1], "Status: complete");
        assert_eq!(texts[heading + 2], "Notes: Reg #123");
    }
}

mod test_degraded_payloads {
    use super::*;

    #[test]
    fn test_control_characters_never_reach_the_document() {
        let data = json!({
            "notes": "pasted\u{1}from\u{b}excel",
            "summary": "tab\tand\u{c}feed\u{fffe}",
        });
        for tag in ["unknown_tool_xyz", "mvp_definition", "pitch_deck"] {
            let bytes = Exporter::new("Brand\u{7}")
                .export(&ArtifactType::from_tag(tag), &data, None, "Team\u{0}X")
                .unwrap()
                .bytes;
            let xml = document_xml(&bytes);
            assert_eq!(illegal_xml_chars(&xml), Vec::<char>::new(), "{tag}");
        }

        let texts = export("unknown_tool_xyz", json!({"notes": "pasted\u{1}from\u{b}excel"}));
        assert!(texts.contains(&"pastedfromexcel".to_string()));
    }

    #[test]
    fn test_every_catalog_type_exports_empty_data() {
        for info in CATALOG {
            let texts = export(info.tag, json!({}));
            assert_eq!(texts[1], info.title, "{}", info.tag);
            assert_eq!(texts[2], TEAM, "{}", info.tag);
        }
    }

    #[test]
    fn test_wrong_shaped_fields_render_placeholders() {
        let texts = export(
            "competitive_landscape",
            json!({"competitors": "not a list", "differentiation": {"nested": true}}),
        );
        assert!(texts.iter().any(|t| t == "—"));
    }

    #[test]
    fn test_pitch_deck_slides_in_fixed_order() {
        let texts = export("pitch_deck", json!({"ask": "R 2m seed", "problem": "Cash flow"}));
        let slides: Vec<&String> = texts.iter().filter(|t| t.starts_with("Slide ")).collect();
        assert_eq!(slides.len(), 10);
        assert_eq!(slides[0], "Slide 1: Problem");
        assert_eq!(slides[9], "Slide 10: The Ask");
    }

    #[test]
    fn test_value_proposition_prepended_for_supporting_types() {
        let vp = ValueProposition {
            solution: Some("Ledgerly".to_string()),
            ..Default::default()
        };
        let bytes = Exporter::default()
            .export(&ArtifactType::MvpDefinition, &json!({}), Some(&vp), TEAM)
            .unwrap()
            .bytes;
        let texts = document_text(&bytes);
        assert_eq!(texts[3], "Value Proposition");
        assert!(texts[4].starts_with("Our product Ledgerly helps —"));
    }
}
