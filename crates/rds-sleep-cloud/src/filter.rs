//! Tag-based resource filtering

use crate::resource::Resource;
use crate::tag::TagConstraintSet;

/// Apply target then exclude constraints
///
/// A resource survives when it carries every target tag and none of the
/// exclude tags. Relative order of the input is kept.
pub fn filter_resources(
    resources: &[Resource],
    target: &TagConstraintSet,
    exclude: &TagConstraintSet,
) -> Vec<Resource> {
    tracing::debug!("checking resource(s) satisfy target condition(s)");
    let candidates: Vec<&Resource> = resources
        .iter()
        .filter(|r| matches_target(r, target))
        .collect();

    tracing::debug!("checking resource(s) match exclude condition(s)");
    candidates
        .into_iter()
        .filter(|r| !matches_exclude(r, exclude))
        .cloned()
        .collect()
}

fn matches_target(resource: &Resource, target: &TagConstraintSet) -> bool {
    match target.iter().find(|tag| !resource.has_tag(tag)) {
        Some(missing) => {
            tracing::debug!(
                "{} is not a target: missing {} (tags: {})",
                resource,
                missing,
                resource.tags_as_string()
            );
            false
        }
        None => {
            tracing::debug!("{} satisfies target condition", resource);
            true
        }
    }
}

fn matches_exclude(resource: &Resource, exclude: &TagConstraintSet) -> bool {
    match exclude.iter().find(|tag| resource.has_tag(tag)) {
        Some(hit) => {
            tracing::debug!("{} removed from candidates: has tag {}", resource, hit);
            true
        }
        None => false,
    }
}
