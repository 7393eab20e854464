use indexmap::IndexMap;
use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

const CODE_FORMATTER_PROFILE_KIND: &str = "CodeFormatterProfile";

#[derive(Debug, Error)]
pub enum ConfigReadError {
  #[error("Error parsing configuration XML: {0}")]
  Xml(#[from] quick_xml::Error),
  #[error("Error reading configuration XML attribute: {0}")]
  Attribute(#[from] quick_xml::events::attributes::AttrError),
  #[error("A <{element}> element is missing its '{attribute}' attribute.")]
  MissingAttribute { element: &'static str, attribute: &'static str },
  #[error("No code formatter profile found in the configuration resource.")]
  NoProfile,
}

/// Reads a code formatter profile document into a flat option map.
///
/// The document has a `<profiles>` root whose `<profile kind="CodeFormatterProfile">`
/// children carry `<setting id value/>` elements. Settings are collected in
/// document order and later duplicates override earlier ones. Profiles of any
/// other kind are skipped.
pub fn read_config(text: &str) -> Result<IndexMap<String, String>, ConfigReadError> {
  let mut reader = Reader::from_str(text);
  let mut options = IndexMap::new();
  let mut in_formatter_profile = false;
  let mut found_profile = false;

  loop {
    match reader.read_event()? {
      Event::Start(tag) | Event::Empty(tag) => match tag.name().as_ref() {
        b"profile" => {
          in_formatter_profile = get_attribute(&tag, "kind")?.as_deref() == Some(CODE_FORMATTER_PROFILE_KIND);
          found_profile |= in_formatter_profile;
        }
        b"setting" if in_formatter_profile => {
          let id = get_attribute(&tag, "id")?.ok_or(ConfigReadError::MissingAttribute {
            element: "setting",
            attribute: "id",
          })?;
          let value = get_attribute(&tag, "value")?.ok_or(ConfigReadError::MissingAttribute {
            element: "setting",
            attribute: "value",
          })?;
          options.insert(id, value);
        }
        _ => {}
      },
      Event::End(tag) if tag.name().as_ref() == b"profile" => {
        in_formatter_profile = false;
      }
      Event::Eof => break,
      _ => {}
    }
  }

  if !found_profile {
    return Err(ConfigReadError::NoProfile);
  }
  Ok(options)
}

fn get_attribute(tag: &BytesStart, name: &str) -> Result<Option<String>, ConfigReadError> {
  for attribute in tag.attributes() {
    let attribute = attribute?;
    if attribute.key.as_ref() == name.as_bytes() {
      let value = attribute.unescape_value().map_err(quick_xml::Error::from)?;
      return Ok(Some(value.into_owned()));
    }
  }
  Ok(None)
}
