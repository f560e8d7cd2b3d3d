use std::collections::HashSet;
use std::str::FromStr;

use serde_json::json;

use pageforge::element::{factory, section};
use pageforge::{Delta, EditorError, ElementType, Position, SectionType};

#[test]
fn new_elements_get_fresh_unique_ids() {
    let a = factory::create_element(ElementType::Heading, Position::new(0, 0));
    let b = factory::create_element(ElementType::Heading, Position::new(0, 0));
    assert_ne!(a.id, b.id);
    assert!(!a.is_locked);
    assert_eq!(a.z_index, 1);
    assert!(a.size.is_none());
}

#[test]
fn default_properties_depend_on_kind() {
    let button = factory::create_element(ElementType::Button, Position::new(10, 20));
    assert_eq!(button.property("paddingX"), Some(&json!(16)));
    assert_eq!(button.property("paddingY"), Some(&json!(8)));
    assert_eq!(button.property("borderRadius"), Some(&json!(4)));
    assert_eq!(button.property("backgroundColor"), Some(&json!("#3b82f6")));

    let heading = factory::create_element(ElementType::Heading, Position::new(0, 0));
    assert_eq!(heading.property("fontSize"), Some(&json!("24px")));
    assert_eq!(heading.property("fontWeight"), Some(&json!("600")));

    let container = factory::create_element(ElementType::Container, Position::new(0, 0));
    assert_eq!(container.property("padding"), Some(&json!(16)));
    assert_eq!(container.property("margin"), Some(&json!(0)));

    let list = factory::create_element(ElementType::List, Position::new(0, 0));
    assert_eq!(
        list.property("items"),
        Some(&json!(["Item 1", "Item 2", "Item 3"]))
    );
}

#[test]
fn hero_section_instantiates_translated_copies() {
    let elements = section::instantiate_section(SectionType::Hero, Delta::new(100, 200));
    assert_eq!(elements.len(), 3);

    let ids: HashSet<&str> = elements.iter().map(|el| el.id.as_str()).collect();
    assert_eq!(ids.len(), 3, "every instantiated element gets a fresh id");

    // Template-relative positions (50,50), (50,110), (50,180) plus offset.
    assert_eq!(elements[0].kind, ElementType::Heading);
    assert_eq!(elements[0].position, Position::new(150, 250));
    assert_eq!(elements[1].kind, ElementType::Text);
    assert_eq!(elements[1].position, Position::new(150, 310));
    assert_eq!(elements[2].kind, ElementType::Button);
    assert_eq!(elements[2].position, Position::new(150, 380));
}

#[test]
fn instantiating_twice_never_reuses_ids() {
    let first = section::instantiate_section(SectionType::Gallery, Delta::new(0, 0));
    let second = section::instantiate_section(SectionType::Gallery, Delta::new(0, 0));
    let mut ids: HashSet<String> = first.into_iter().map(|el| el.id).collect();
    for element in second {
        assert!(ids.insert(element.id), "id reused across instantiations");
    }
}

#[test]
fn unknown_type_names_are_rejected() {
    assert_eq!(
        ElementType::from_str("video"),
        Err(EditorError::UnknownElementType("video".to_owned()))
    );
    assert_eq!(
        SectionType::from_str("footer"),
        Err(EditorError::UnknownSectionType("footer".to_owned()))
    );
}

#[test]
fn section_templates_cover_the_closed_set() {
    for kind in SectionType::ALL {
        let elements = section::instantiate_section(kind, Delta::new(0, 0));
        assert!(!elements.is_empty(), "{kind} template must not be empty");
        assert!(
            elements.iter().all(|el| el.z_index == 1 && !el.is_locked),
            "templated elements start unlocked on layer 1"
        );
    }
}
