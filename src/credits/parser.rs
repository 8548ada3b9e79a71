//! Event-driven parser for the credits XML document.
//!
//! The parser is a nesting-context state machine over `quick-xml` reader
//! events. Instead of tracking a nullable "current element" per entity, it
//! keeps an explicit stack of [`Scope`] values, so illegal nesting (an
//! `artifact` outside a `credit`, a `component` at document root) is checked
//! uniformly when a scope is opened.
//!
//! The output is a [`RawCatalog`] of unvalidated entity maps. References to
//! named owners and licenses are kept as unresolved placeholders: forward
//! references (a `keyref` appearing before its target is declared) are legal,
//! so resolution is deferred to [`crate::credits::resolver`]. The only checks
//! performed here are local structural placement and key uniqueness.

use std::collections::HashMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::credits::domain::{ArtifactCoordinate, LicenseRecord, OwnerRecord};
use crate::shared::error::CreditsError;

const KEY_ATTR: &str = "key";
const KEYREF_ATTR: &str = "keyref";
const FORCE_ATTR: &str = "force";
const GROUP_ID_ATTR: &str = "groupId";
const ARTIFACT_ID_ATTR: &str = "artifactId";

/// Raw parse output: entity maps with unresolved owner/license placeholders.
#[derive(Debug, Default)]
pub struct RawCatalog {
    /// credit key -> raw credit (owner/license possibly unresolved)
    pub(crate) credits: HashMap<String, RawCredit>,
    /// artifact coordinate -> key of the enclosing credit
    pub(crate) artifacts: HashMap<ArtifactCoordinate, String>,
    /// named-owners catalog
    pub(crate) owners: HashMap<String, OwnerRecord>,
    /// named-licenses catalog (namespace disjoint from owners)
    pub(crate) licenses: HashMap<String, LicenseRecord>,
}

/// A credit as collected during the parse pass, before validation.
#[derive(Debug)]
pub struct RawCredit {
    pub(crate) key: String,
    pub(crate) force: bool,
    pub(crate) component: Option<String>,
    pub(crate) owner: Option<OwnerSpec>,
    pub(crate) license: Option<LicenseSpec>,
}

impl RawCredit {
    fn new(key: String, force: bool) -> Self {
        Self {
            key,
            force,
            component: None,
            owner: None,
            license: None,
        }
    }
}

/// Owner definition as written in the document: inline text or a reference
/// into the named-owners catalog, resolved later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerSpec {
    Inline(String),
    Reference(String),
}

/// License definition, same duality as [`OwnerSpec`] in its own namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseSpec {
    Inline(String),
    Reference(String),
}

/// One open nesting context. The bottom of the stack (after the root element
/// is seen) is always `Catalog`.
#[derive(Debug)]
enum Scope {
    /// Inside the root `credits` element
    Catalog,
    /// Inside the named-owners section
    Owners,
    /// Inside the named-licenses section
    Licenses,
    /// Inside a `credit` element, accumulating its fields
    Credit(RawCredit),
    /// Inside a `component` element, accumulating display-name text
    Component { text: String },
    /// Inside an `owner` element: named entry (in the owners section,
    /// `key` is Some) or inline entry (in a credit, `key` is None)
    OwnerEntry { key: Option<String>, text: String },
    /// Inside a `license` element, same duality as `OwnerEntry`
    LicenseEntry { key: Option<String>, text: String },
    /// Inside an empty-content element (`ownerRef`, `licenseRef`,
    /// `artifact`) whose attributes were already consumed on open
    Leaf,
}

/// Parses a credits document into raw, unvalidated entity maps.
pub fn parse(document: &str) -> Result<RawCatalog, CreditsError> {
    let mut reader = Reader::from_str(document);
    reader.config_mut().trim_text(true);

    let mut parser = CreditsParser::new();

    loop {
        let position = reader.buffer_position();
        match reader.read_event().map_err(|e| xml_error(e, position))? {
            Event::Start(element) => parser.open(&element)?,
            Event::Empty(element) => parser.open_and_close(&element)?,
            Event::End(_) => parser.close_current()?,
            Event::Text(text) => {
                let text = text.unescape().map_err(|e| xml_error(e, position))?;
                parser.append_text(&text);
            }
            Event::CData(data) => {
                let text = String::from_utf8_lossy(&data.into_inner()).into_owned();
                parser.append_text(&text);
            }
            Event::Eof => return parser.finish(),
            // Declarations, comments, processing instructions and doctypes
            // carry no catalog content.
            _ => {}
        }
    }
}

struct CreditsParser {
    stack: Vec<Scope>,
    catalog: RawCatalog,
    root_seen: bool,
}

impl CreditsParser {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            catalog: RawCatalog::default(),
            root_seen: false,
        }
    }

    /// Opens a scope for a start tag, enforcing placement rules.
    fn open(&mut self, element: &BytesStart) -> Result<(), CreditsError> {
        let scope = self.enter(element)?;
        self.stack.push(scope);
        Ok(())
    }

    /// Handles an empty-element tag (`<artifact .../>`) as open + close.
    fn open_and_close(&mut self, element: &BytesStart) -> Result<(), CreditsError> {
        let scope = self.enter(element)?;
        self.leave(scope)
    }

    fn close_current(&mut self) -> Result<(), CreditsError> {
        // The reader verifies end-tag names against start tags, so an End
        // event always matches the scope on top of the stack.
        let scope = self.stack.pop().ok_or_else(|| malformed("unexpected end tag"))?;
        self.leave(scope)
    }

    fn enter(&mut self, element: &BytesStart) -> Result<Scope, CreditsError> {
        let name = element.local_name();
        match name.as_ref() {
            b"credits" => {
                if self.root_seen || !self.stack.is_empty() {
                    return Err(placement("credits", "must be the document root"));
                }
                self.root_seen = true;
                Ok(Scope::Catalog)
            }

            b"owners" => {
                self.require_catalog_context("owners")?;
                Ok(Scope::Owners)
            }

            b"licenses" => {
                self.require_catalog_context("licenses")?;
                Ok(Scope::Licenses)
            }

            b"credit" => {
                self.require_catalog_context("credit")?;
                let key = required_attr(element, "credit", KEY_ATTR)?;
                if self.catalog.credits.contains_key(&key) {
                    return Err(malformed(format!("duplicate credit key '{}'", key)));
                }
                let force = parse_flag(attr(element, FORCE_ATTR)?.as_deref());
                Ok(Scope::Credit(RawCredit::new(key, force)))
            }

            b"component" => {
                self.require_credit_context("component")?;
                Ok(Scope::Component {
                    text: String::new(),
                })
            }

            b"owner" => match self.stack.last() {
                Some(Scope::Owners) => {
                    let key = required_attr(element, "owner", KEY_ATTR)?;
                    if self.catalog.owners.contains_key(&key) {
                        return Err(malformed(format!(
                            "duplicate owner key '{}' in the owners section",
                            key
                        )));
                    }
                    Ok(Scope::OwnerEntry {
                        key: Some(key),
                        text: String::new(),
                    })
                }
                Some(Scope::Credit(_)) => Ok(Scope::OwnerEntry {
                    key: None,
                    text: String::new(),
                }),
                _ => Err(placement(
                    "owner",
                    "only valid inside element 'owners' or element 'credit'",
                )),
            },

            b"license" => match self.stack.last() {
                Some(Scope::Licenses) => {
                    let key = required_attr(element, "license", KEY_ATTR)?;
                    if self.catalog.licenses.contains_key(&key) {
                        return Err(malformed(format!(
                            "duplicate license key '{}' in the licenses section",
                            key
                        )));
                    }
                    Ok(Scope::LicenseEntry {
                        key: Some(key),
                        text: String::new(),
                    })
                }
                Some(Scope::Credit(_)) => Ok(Scope::LicenseEntry {
                    key: None,
                    text: String::new(),
                }),
                _ => Err(placement(
                    "license",
                    "only valid inside element 'licenses' or element 'credit'",
                )),
            },

            b"ownerRef" => {
                let keyref = required_attr(element, "ownerRef", KEYREF_ATTR)?;
                let credit = self.current_credit_mut("ownerRef")?;
                if credit.owner.is_some() {
                    return Err(malformed(format!(
                        "duplicate owner definition for credit with key {}",
                        credit.key
                    )));
                }
                credit.owner = Some(OwnerSpec::Reference(keyref));
                Ok(Scope::Leaf)
            }

            b"licenseRef" => {
                let keyref = required_attr(element, "licenseRef", KEYREF_ATTR)?;
                let credit = self.current_credit_mut("licenseRef")?;
                if credit.license.is_some() {
                    return Err(malformed(format!(
                        "duplicate license definition for credit with key {}",
                        credit.key
                    )));
                }
                credit.license = Some(LicenseSpec::Reference(keyref));
                Ok(Scope::Leaf)
            }

            b"artifact" => {
                let group_id = required_attr(element, "artifact", GROUP_ID_ATTR)?;
                let artifact_id = required_attr(element, "artifact", ARTIFACT_ID_ATTR)?;
                let coordinate = ArtifactCoordinate::new(group_id, artifact_id)
                    .map_err(|e| malformed(e.to_string()))?;

                let credit_key = {
                    let credit = self.current_credit_mut("artifact")?;
                    credit.key.clone()
                };

                if self.catalog.artifacts.contains_key(&coordinate) {
                    return Err(malformed(format!(
                        "duplicate artifact coordinate '{}'",
                        coordinate
                    )));
                }
                self.catalog.artifacts.insert(coordinate, credit_key);
                Ok(Scope::Leaf)
            }

            other => Err(malformed(format!(
                "unexpected element '{}'",
                String::from_utf8_lossy(other)
            ))),
        }
    }

    fn leave(&mut self, scope: Scope) -> Result<(), CreditsError> {
        match scope {
            Scope::Catalog | Scope::Owners | Scope::Licenses | Scope::Leaf => Ok(()),

            Scope::Credit(credit) => {
                // Key uniqueness was checked on entry.
                self.catalog.credits.insert(credit.key.clone(), credit);
                Ok(())
            }

            Scope::Component { text } => {
                let credit = self.current_credit_mut("component")?;
                if credit.component.is_some() {
                    return Err(malformed(format!(
                        "duplicate element 'component' for credit with key {}",
                        credit.key
                    )));
                }
                credit.component = Some(text.trim().to_string());
                Ok(())
            }

            Scope::OwnerEntry { key: Some(key), text } => {
                let record = OwnerRecord::named(key.clone(), text.trim());
                self.catalog.owners.insert(key, record);
                Ok(())
            }

            Scope::OwnerEntry { key: None, text } => {
                let credit = self.current_credit_mut("owner")?;
                if credit.owner.is_some() {
                    return Err(malformed(format!(
                        "duplicate owner definition for credit with key {}",
                        credit.key
                    )));
                }
                credit.owner = Some(OwnerSpec::Inline(text.trim().to_string()));
                Ok(())
            }

            Scope::LicenseEntry { key: Some(key), text } => {
                let record = LicenseRecord::named(key.clone(), text.trim());
                self.catalog.licenses.insert(key, record);
                Ok(())
            }

            Scope::LicenseEntry { key: None, text } => {
                let credit = self.current_credit_mut("license")?;
                if credit.license.is_some() {
                    return Err(malformed(format!(
                        "duplicate license definition for credit with key {}",
                        credit.key
                    )));
                }
                credit.license = Some(LicenseSpec::Inline(text.trim().to_string()));
                Ok(())
            }
        }
    }

    /// Accumulates character data into the innermost text-bearing scope.
    /// Text anywhere else (stray characters between credits) is ignored.
    fn append_text(&mut self, text: &str) {
        if let Some(
            Scope::Component { text: buf }
            | Scope::OwnerEntry { text: buf, .. }
            | Scope::LicenseEntry { text: buf, .. },
        ) = self.stack.last_mut()
        {
            if !buf.is_empty() {
                buf.push(' ');
            }
            buf.push_str(text);
        }
    }

    fn finish(self) -> Result<RawCatalog, CreditsError> {
        if !self.root_seen {
            return Err(malformed("missing root element 'credits'"));
        }
        if !self.stack.is_empty() {
            return Err(malformed("unexpected end of document"));
        }
        Ok(self.catalog)
    }

    fn require_catalog_context(&self, element: &str) -> Result<(), CreditsError> {
        match self.stack.last() {
            Some(Scope::Catalog) => Ok(()),
            _ => Err(placement(element, "only valid directly inside element 'credits'")),
        }
    }

    fn require_credit_context(&self, element: &str) -> Result<(), CreditsError> {
        match self.stack.last() {
            Some(Scope::Credit(_)) => Ok(()),
            _ => Err(placement(element, "not inside element 'credit'")),
        }
    }

    fn current_credit_mut(&mut self, element: &str) -> Result<&mut RawCredit, CreditsError> {
        match self.stack.last_mut() {
            Some(Scope::Credit(credit)) => Ok(credit),
            _ => Err(placement(element, "not inside element 'credit'")),
        }
    }
}

/// Lenient boolean grammar for the `force` attribute: a handful of
/// affirmative spellings are true, everything else (including absence)
/// is false.
fn parse_flag(value: Option<&str>) -> bool {
    match value {
        Some(v) => matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes" | "y" | "on"
        ),
        None => false,
    }
}

fn attr(element: &BytesStart, name: &str) -> Result<Option<String>, CreditsError> {
    let attribute = element
        .try_get_attribute(name)
        .map_err(|e| malformed(format!("invalid attribute '{}': {}", name, e)))?;

    match attribute {
        Some(a) => {
            let value = a
                .unescape_value()
                .map_err(|e| malformed(format!("invalid value for attribute '{}': {}", name, e)))?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}

/// A required attribute that must be present and non-blank.
fn required_attr(
    element: &BytesStart,
    element_name: &str,
    name: &str,
) -> Result<String, CreditsError> {
    match attr(element, name)? {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(malformed(format!(
            "missing or blank attribute '{}' on element '{}'",
            name, element_name
        ))),
    }
}

fn malformed(details: impl Into<String>) -> CreditsError {
    CreditsError::MalformedDocument {
        details: details.into(),
    }
}

fn placement(element: &str, details: &str) -> CreditsError {
    CreditsError::StructuralPlacement {
        element: element.to_string(),
        details: details.to_string(),
    }
}

fn xml_error(error: impl std::fmt::Display, position: impl std::fmt::Display) -> CreditsError {
    malformed(format!("XML error at position {}: {}", position, error))
}
