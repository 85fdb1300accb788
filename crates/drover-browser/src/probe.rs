use crate::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::HashMap;
use std::path::Path;

/// Where the Chrome application manifest lives on macOS
pub const CHROME_MANIFEST_PATH: &str = "/Applications/Google Chrome.app/Contents/Info.plist";

/// Manifest key whose paired value is the installed Chrome version
pub const VERSION_KEY: &str = "KSVersion";

/// Read the installed Chrome version from the default manifest location
pub fn installed_version() -> Result<String> {
    version_from_manifest(Path::new(CHROME_MANIFEST_PATH))
}

/// Read the Chrome version from a manifest file at `path`.
///
/// The plist is treated as a flat stream of tagged entries: each `<key>`
/// pairs with the text of the entry that immediately follows it. The
/// version is the value paired with [`VERSION_KEY`].
pub fn version_from_manifest(path: &Path) -> Result<String> {
    tracing::debug!("Reading browser manifest from: {}", path.display());

    let xml = std::fs::read_to_string(path)?;
    let entries = manifest_entries(&xml)?;

    entries
        .get(VERSION_KEY)
        .cloned()
        .ok_or(Error::VersionKeyMissing)
}

/// Map each `<key>` to the text of the entry immediately following it.
///
/// Empty-element values (`<true/>`, `<false/>`) carry no text and never
/// pair, so a boolean-valued key cannot shadow a later textual pair.
fn manifest_entries(xml: &str) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = HashMap::new();
    let mut current_tag: Option<String> = None;
    let mut pending_key: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(tag) => {
                current_tag = Some(String::from_utf8_lossy(tag.name().as_ref()).into_owned());
            }
            Event::Empty(_) => {
                pending_key = None;
                current_tag = None;
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(quick_xml::Error::from)?
                    .into_owned();
                match current_tag.as_deref() {
                    Some("key") => pending_key = Some(text),
                    Some(_) => {
                        if let Some(key) = pending_key.take() {
                            entries.insert(key, text);
                        }
                    }
                    None => {}
                }
            }
            Event::End(_) => current_tag = None,
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(entries)
}
