use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{debug, warn};

use themepak_archive::{ExtractOptions, Member, ThemeArchive};

use crate::error::Result;
use crate::locations::{Category, Locations};
use crate::report::{InstallReport, Outcome};
use crate::reporter::Reporter;

/// Leading components removed from every extracted member: the archive
/// root directory and the category directory itself.
pub const STRIP_COMPONENTS: usize = 2;

/// Members whose final component names a category supported in the
/// active scope, deduplicated by path, in archive order.
pub fn find_themes(members: &[Member], locations: &Locations) -> Vec<(Member, Category)> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut found = Vec::new();

    for member in members {
        let Some(name) = member.file_name() else {
            continue;
        };
        let Some(category) = Category::from_dir_name(name) else {
            continue;
        };
        if !category.supported_in(locations.scope()) {
            debug!(%category, scope = %locations.scope(), "category has no table entry in this scope, ignoring");
            continue;
        }
        if seen.insert(member.path.clone()) {
            found.push((member.clone(), category));
        }
    }

    found
}

/// Extract every found theme into its category's destination.
///
/// Permission denied on one category is bookkept as skipped and the
/// loop continues; any other failure aborts the run.
pub fn install(
    archive: &ThemeArchive,
    themes: &[(Member, Category)],
    locations: &Locations,
    reporter: &dyn Reporter,
) -> Result<InstallReport> {
    let mut report = InstallReport::default();

    for (index, (member, category)) in themes.iter().enumerate() {
        let dest = locations.resolve(*category)?;
        reporter.progress(index, themes.len(), *category, &dest);

        let options = ExtractOptions::default()
            .prefix(member.path.clone())
            .strip_components(STRIP_COMPONENTS);

        match archive.extract(&dest, &options) {
            Ok(count) => {
                debug!(%category, count, dest = %dest.display(), "category extracted");
                report.succeeded += 1;
                reporter.outcome(*category, Outcome::Succeeded);
            }
            Err(e) if e.is_permission_denied() => {
                warn!(%category, dest = %dest.display(), "destination not writable, skipping category");
                report.skipped += 1;
                reporter.outcome(*category, Outcome::SkippedPermission);
            }
            Err(e) => return Err(e.into()),
        }
        report.total += 1;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::{LocationOptions, Scope};
    use themepak_archive::MemberKind;

    fn dir(path: &str) -> Member {
        Member::new(PathBuf::from(path), 0, Some(0o755), MemberKind::Directory)
    }

    fn locations(scope: Scope) -> Locations {
        Locations::with_roots(
            scope,
            PathBuf::from("/usr/share"),
            PathBuf::from("/home/kate/.local/share"),
            PathBuf::from("/home/kate/.config"),
            PathBuf::from("/home/kate/.icons"),
            LocationOptions::default(),
        )
    }

    #[test]
    fn classifies_category_directories() {
        let members = vec![
            dir("pkg"),
            dir("pkg/icon themes"),
            dir("pkg/icon themes/Frost"),
            dir("pkg/color schemes"),
            dir("pkg/artwork"),
        ];
        let found = find_themes(&members, &locations(Scope::Local));
        let categories: Vec<_> = found.iter().map(|(_, c)| *c).collect();
        assert_eq!(categories, [Category::IconThemes, Category::ColorSchemes]);
    }

    #[test]
    fn deduplicates_by_path() {
        let members = vec![dir("pkg/icon themes"), dir("pkg/icon themes")];
        let found = find_themes(&members, &locations(Scope::Local));
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn kvantum_ignored_under_global_scope() {
        let members = vec![dir("pkg/kvantum themes")];
        assert!(find_themes(&members, &locations(Scope::Global)).is_empty());
        assert_eq!(find_themes(&members, &locations(Scope::Local)).len(), 1);
    }

    #[test]
    fn unrecognized_names_do_not_classify() {
        let members = vec![dir("pkg/Icon Themes"), dir("pkg/wallpapers"), dir("pkg")];
        assert!(find_themes(&members, &locations(Scope::Local)).is_empty());
    }
}
