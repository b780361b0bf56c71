use chrono::NaiveDate;
use serde_yaml::Value;
use tracing::debug;

use themepak_archive::{Member, MemberKind, ThemeArchive};

use crate::error::{Error, Result};

/// Marker file every theme package must carry. Its content is unused;
/// existence is what marks the archive as a package.
pub const PACKAGE_MARKER: &str = "themepackage.txt";

/// Accepted names for the description document.
pub const DESCRIPTION_FILES: [&str; 2] = ["description.yaml", "description.yml"];

/// Identity and metadata of one theme package.
///
/// `credits` and `pub_date` belong to newer package formats; the legacy
/// description document never populates them.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemePackage {
    pub name: String,
    pub author: String,
    pub version: String,
    pub credits: Option<Vec<String>>,
    pub pub_date: Option<NaiveDate>,
    pub up_to_date: Option<bool>,
    pub description: Option<String>,
}

/// Locate and parse the package description inside the archive.
///
/// Both metadata files must exist somewhere in the tree, matched by
/// final path component.
pub fn load_descriptor(archive: &ThemeArchive, members: &[Member]) -> Result<ThemePackage> {
    if !members
        .iter()
        .any(|m| m.file_name() == Some(PACKAGE_MARKER))
    {
        return Err(Error::MissingMetadata {
            file: PACKAGE_MARKER,
        });
    }

    let description = members
        .iter()
        .find(|m| m.file_name().is_some_and(|n| DESCRIPTION_FILES.contains(&n)))
        .ok_or(Error::MissingMetadata {
            file: "description.yaml",
        })?;

    if !matches!(description.kind, MemberKind::File) {
        return Err(Error::MalformedMetadata {
            reason: "description is not a regular file".into(),
        });
    }

    debug!(path = %description.path.display(), "reading package description");
    let bytes = archive.read_member(&description.path)?;
    let text = String::from_utf8(bytes).map_err(|_| Error::MalformedMetadata {
        reason: "description is not valid UTF-8".into(),
    })?;

    parse_description(&text)
}

/// Parse the description document.
///
/// `name`, `author` and `version` are required. `up to date` and
/// `description` are optional and independent of one another.
pub fn parse_description(text: &str) -> Result<ThemePackage> {
    let root: Value = serde_yaml::from_str(text).map_err(|e| Error::MalformedMetadata {
        reason: e.to_string(),
    })?;

    let package = root.get("ThemePackage").ok_or_else(|| Error::MalformedMetadata {
        reason: "missing top-level `ThemePackage` mapping".into(),
    })?;
    if !package.is_mapping() {
        return Err(Error::MalformedMetadata {
            reason: "`ThemePackage` is not a mapping".into(),
        });
    }

    Ok(ThemePackage {
        name: required_string(package, "name")?,
        author: required_string(package, "author")?,
        version: required_string(package, "version")?,
        credits: None,
        pub_date: None,
        up_to_date: package.get("up to date").and_then(Value::as_bool),
        description: package
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_owned),
    })
}

// `version` is commonly written unquoted and parses as a number.
fn required_string(package: &Value, field: &'static str) -> Result<String> {
    let value = package
        .get(field)
        .ok_or(Error::MissingRequiredField { field })?;
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(Error::MalformedMetadata {
            reason: format!("field `{field}` is not a string"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "\
ThemePackage:
  name: Frost
  author: Kate Example
  version: \"1.2\"
  up to date: true
  description: A cool blue look.
";

    #[test]
    fn parse_full_description() {
        let package = parse_description(FULL).unwrap();
        assert_eq!(package.name, "Frost");
        assert_eq!(package.author, "Kate Example");
        assert_eq!(package.version, "1.2");
        assert_eq!(package.up_to_date, Some(true));
        assert_eq!(package.description.as_deref(), Some("A cool blue look."));
        assert!(package.credits.is_none());
        assert!(package.pub_date.is_none());
    }

    #[test]
    fn optional_fields_default_to_absent() {
        let text = "\
ThemePackage:
  name: Frost
  author: Kate Example
  version: \"1.2\"
";
        let package = parse_description(text).unwrap();
        assert_eq!(package.up_to_date, None);
        assert_eq!(package.description, None);
    }

    #[test]
    fn optional_fields_are_independent() {
        let text = "\
ThemePackage:
  name: Frost
  author: Kate Example
  version: \"1.2\"
  up to date: false
";
        let package = parse_description(text).unwrap();
        assert_eq!(package.up_to_date, Some(false));
        assert_eq!(package.description, None);
    }

    #[test]
    fn integer_version_is_normalized() {
        let text = "\
ThemePackage:
  name: Frost
  author: Kate Example
  version: 2
";
        let package = parse_description(text).unwrap();
        assert_eq!(package.version, "2");
    }

    #[test]
    fn missing_author_names_the_field() {
        let text = "\
ThemePackage:
  name: Frost
  version: \"1.2\"
";
        let result = parse_description(text);
        assert!(matches!(
            result,
            Err(Error::MissingRequiredField { field: "author" })
        ));
    }

    #[test]
    fn missing_name_names_the_field() {
        let text = "\
ThemePackage:
  author: Kate Example
  version: \"1.2\"
";
        assert!(matches!(
            parse_description(text),
            Err(Error::MissingRequiredField { field: "name" })
        ));
    }

    #[test]
    fn missing_top_level_key_is_malformed() {
        let text = "name: Frost\nauthor: Kate\nversion: 1\n";
        assert!(matches!(
            parse_description(text),
            Err(Error::MalformedMetadata { .. })
        ));
    }

    #[test]
    fn non_yaml_is_malformed() {
        assert!(matches!(
            parse_description("\t{{{{not yaml"),
            Err(Error::MalformedMetadata { .. })
        ));
    }
}
