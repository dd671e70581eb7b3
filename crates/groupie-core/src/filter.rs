//! Compound predicate over joined artist views.

use chrono::NaiveDate;
use tracing::debug;

use crate::dates;
use crate::model::ArtistView;

/// What a listing request asked for. Empty or zero fields are inactive.
///
/// A negative member count is active and matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: Option<String>,
    pub target_date: Option<String>,
    pub member_count: Option<i64>,
}

impl FilterCriteria {
    /// True when no predicate is active.
    pub fn is_empty(&self) -> bool {
        active(&self.query).is_none()
            && active(&self.target_date).is_none()
            && self.member_count.unwrap_or(0) == 0
    }
}

fn active(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

enum DateTarget {
    Any,
    On(NaiveDate),
    Nothing,
}

/// Criteria resolved once per call, so the target date is parsed a single time.
struct Predicate {
    needle: Option<String>,
    date: DateTarget,
    members: Option<i64>,
}

impl Predicate {
    fn compile(criteria: &FilterCriteria) -> Self {
        let date = match active(&criteria.target_date) {
            None => DateTarget::Any,
            Some(raw) => match dates::parse(raw) {
                Ok(day) => DateTarget::On(day),
                Err(e) => {
                    debug!("date filter matches nothing: {e}");
                    DateTarget::Nothing
                }
            },
        };

        Self {
            needle: active(&criteria.query).map(str::to_lowercase),
            date,
            members: criteria.member_count.filter(|n| *n != 0),
        }
    }

    fn matches(&self, view: &ArtistView) -> bool {
        self.matches_text(view) && self.matches_date(view) && self.matches_members(view)
    }

    fn matches_text(&self, view: &ArtistView) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        view.name.to_lowercase().contains(needle.as_str())
            || view.members.join(" ").to_lowercase().contains(needle.as_str())
    }

    fn matches_date(&self, view: &ArtistView) -> bool {
        match self.date {
            DateTarget::Any => true,
            DateTarget::Nothing => false,
            DateTarget::On(target) => view
                .dates
                .iter()
                .any(|raw| dates::parse(raw).is_ok_and(|d| d == target)),
        }
    }

    fn matches_members(&self, view: &ArtistView) -> bool {
        self.members
            .map_or(true, |n| usize::try_from(n).is_ok_and(|n| view.members.len() == n))
    }
}

/// Keep the views that satisfy every active predicate, in their input order.
pub fn filter(views: Vec<ArtistView>, criteria: &FilterCriteria) -> Vec<ArtistView> {
    if criteria.is_empty() {
        return views;
    }
    let predicate = Predicate::compile(criteria);
    views.into_iter().filter(|v| predicate.matches(v)).collect()
}
