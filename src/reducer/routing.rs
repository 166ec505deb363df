//! Ownership routing for dispatched actions.

use crate::action::{Action, ItemId};

use super::{Extension, ReducerState};

/// Where an action lands relative to a reducer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Route<'a> {
    /// Not addressed to this reducer at all.
    NotMine,
    /// Addressed to a child collection inside an existing map entry.
    Nested {
        collection: &'a str,
        parent_id: &'a ItemId,
    },
    /// Addressed to this reducer; apply the tagged transition.
    Direct,
}

/// Route an action for a collection bound to `name` under `parent_id`.
///
/// A collection never yields [`Route::Nested`].
pub(crate) fn route_collection<'a>(
    name: &str,
    parent_id: Option<&ItemId>,
    action: &'a Action,
) -> Route<'a> {
    if action.collection.as_deref() != Some(name) {
        return Route::NotMine;
    }

    match &action.parent_id {
        Some(target) if Some(target) != parent_id => Route::NotMine,
        _ => Route::Direct,
    }
}

/// Route an action for a map bound to `name`.
///
/// `has_entry` reports whether the current map state holds a key; nested
/// routing only happens for existing entries.
pub(crate) fn route_map<'a>(
    name: &str,
    children: Option<&[String]>,
    action: &'a Action,
    has_entry: impl Fn(&ItemId) -> bool,
) -> Route<'a> {
    if action.map.as_deref() != Some(name) {
        return Route::NotMine;
    }

    let (Some(children), Some(collection), Some(parent_id)) = (
        children,
        action.collection.as_deref(),
        action.parent_id.as_ref(),
    ) else {
        return Route::Direct;
    };

    if !children.iter().any(|child| child == collection) {
        Route::NotMine
    } else if has_entry(parent_id) {
        Route::Nested {
            collection,
            parent_id,
        }
    } else {
        Route::Direct
    }
}

/// The not-recognized path: hand the state to the extension, if any.
pub(crate) fn fallback<S: ReducerState>(
    extension: Option<&Extension<S>>,
    state: S,
    action: &Action,
) -> S {
    match extension {
        Some(extension) => {
            tracing::trace!(tag = action.tag(), "delegating to extension reducer");
            extension.apply(state, action)
        }
        None => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn children() -> Vec<String> {
        vec!["comments".to_string(), "events".to_string()]
    }

    #[test]
    fn collection_requires_matching_name() {
        let action = Action::collection_is_complete("posts");
        assert_eq!(route_collection("posts", None, &action), Route::Direct);
        assert_eq!(route_collection("users", None, &action), Route::NotMine);
    }

    #[test]
    fn collection_without_name_is_not_mine() {
        let action = Action::custom("TEST", Default::default());
        assert_eq!(route_collection("posts", None, &action), Route::NotMine);
    }

    #[test]
    fn collection_parent_id_must_match_binding() {
        let action = Action::collection_is_complete("comments").nested_in("posts", ItemId::Int(1));
        let one = ItemId::Int(1);
        let two = ItemId::Int(2);
        assert_eq!(route_collection("comments", Some(&one), &action), Route::Direct);
        assert_eq!(route_collection("comments", Some(&two), &action), Route::NotMine);
        assert_eq!(route_collection("comments", None, &action), Route::NotMine);
    }

    #[test]
    fn collection_absent_parent_id_matches_any_binding() {
        let action = Action::collection_is_complete("comments");
        let one = ItemId::Int(1);
        assert_eq!(route_collection("comments", Some(&one), &action), Route::Direct);
    }

    #[test]
    fn map_requires_matching_name() {
        let action = Action::map_remove("users", ItemId::Int(1));
        assert_eq!(route_map("posts", None, &action, |_| true), Route::NotMine);
        assert_eq!(route_map("users", None, &action, |_| true), Route::Direct);
    }

    #[test]
    fn map_foreign_child_collection_is_not_mine() {
        let children = children();
        let action = Action::collection_append("cats", vec![]).nested_in("posts", ItemId::Int(1));
        assert_eq!(
            route_map("posts", Some(&children), &action, |_| true),
            Route::NotMine
        );
    }

    #[test]
    fn map_known_child_with_entry_is_nested() {
        let children = children();
        let action = Action::collection_append("events", vec![]).nested_in("posts", ItemId::Int(1));
        assert_eq!(
            route_map("posts", Some(&children), &action, |id| *id == ItemId::Int(1)),
            Route::Nested {
                collection: "events",
                parent_id: &ItemId::Int(1)
            }
        );
    }

    #[test]
    fn map_known_child_without_entry_is_direct() {
        let children = children();
        let action = Action::collection_append("events", vec![]).nested_in("posts", ItemId::Int(3));
        assert_eq!(
            route_map("posts", Some(&children), &action, |_| false),
            Route::Direct
        );
    }

    #[test]
    fn map_without_children_never_nests() {
        let action = Action::collection_append("events", vec![]).nested_in("posts", ItemId::Int(1));
        assert_eq!(route_map("posts", None, &action, |_| true), Route::Direct);
    }

    #[test]
    fn map_nests_on_parent_id_zero() {
        let children = children();
        let action = Action::collection_is_complete("comments").nested_in("posts", ItemId::Int(0));
        assert!(matches!(
            route_map("posts", Some(&children), &action, |_| true),
            Route::Nested { .. }
        ));
    }
}
