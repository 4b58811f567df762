use super::{CompiledQuery, QueryBuilder};
use crate::model::{RaceFilter, SortOrder};

/// Start time as an instant, so rows stored with different offsets or
/// fractional precision still sort chronologically
const START_TIME_ORDER: &str = "julianday(advertised_start_time)";

/// Compile a race listing query
///
/// With no filter the base query is returned as-is. Otherwise:
/// - non-empty `meeting_ids` restrict membership, one param per id
/// - `visible` is always constrained: the explicit value when set, `true`
///   when unset
/// - results are always ordered by start time, descending only when asked
pub fn compile_race_query(base: &str, filter: Option<&RaceFilter>) -> CompiledQuery {
    let Some(filter) = filter else {
        return CompiledQuery::bare(base);
    };

    let mut builder = QueryBuilder::new(base);

    builder.push_in("meeting_id", filter.meeting_ids.iter().copied());
    builder.push_eq("visible", filter.visible.unwrap_or(true));

    let order = filter.order.unwrap_or(SortOrder::Ascending);
    builder.order_by(START_TIME_ORDER, order.as_sql());

    builder.build()
}
