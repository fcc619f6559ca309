use super::{Reason, RuleContext};
use crate::model::TravellerRecord;
use crate::reference::Watchlist;
use kanadia_types::ids;

/// Which identity field produced a watchlist hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchlistMatch {
    Name,
    Passport,
}

pub fn is_secondary(record: &TravellerRecord, watchlist: &Watchlist) -> bool {
    watchlist_match(record, watchlist).is_some()
}

/// Linear scan; the first entry that matches wins.
///
/// An entry matches on upper-cased first and last name together, or on exact passport
/// equality.
pub fn watchlist_match(record: &TravellerRecord, watchlist: &Watchlist) -> Option<WatchlistMatch> {
    let first = record.first_name.as_deref().map(str::to_uppercase);
    let last = record.last_name.as_deref().map(str::to_uppercase);
    let passport = record.passport.as_deref();

    watchlist.entries().iter().find_map(|entry| {
        let name_hit = first.as_deref() == Some(entry.first_name.to_uppercase().as_str())
            && last.as_deref() == Some(entry.last_name.to_uppercase().as_str());
        if name_hit {
            Some(WatchlistMatch::Name)
        } else if passport == Some(entry.passport.as_str()) {
            Some(WatchlistMatch::Passport)
        } else {
            None
        }
    })
}

pub(super) fn check(record: &TravellerRecord, ctx: &RuleContext<'_>) -> Option<Reason> {
    watchlist_match(record, ctx.watchlist).map(|hit| match hit {
        WatchlistMatch::Name => Reason {
            code: ids::CODE_WATCHLIST_NAME,
            message: "traveller name matches a watchlist entry".to_string(),
        },
        WatchlistMatch::Passport => Reason {
            code: ids::CODE_WATCHLIST_PASSPORT,
            message: "passport number matches a watchlist entry".to_string(),
        },
    })
}
