//! Column-synonym resolution.

use std::collections::BTreeMap;

use ledgerlens_types::Column;

/// Fixed synonym table: canonical column to accepted literal variants.
///
/// Variants are stored pre-cleaned (no whitespace, lower case) and matched
/// by exact equality against the cleaned observed name. The table covers
/// the header vocabulary seen across Chinese brokerage exports plus the
/// English equivalents; extending it is a source change, not configuration.
const SYNONYMS: &[(Column, &[&str])] = &[
    (
        Column::Code,
        &[
            "证券代码",
            "代码",
            "证券id",
            "股票代码",
            "证券代号",
            "securitycode",
            "stockcode",
            "code",
            "symbol",
        ],
    ),
    (
        Column::Quantity,
        &[
            "成交数量",
            "成交量",
            "数量",
            "发生数量",
            "股数",
            "成交股数",
            "quantity",
            "qty",
            "volume",
            "tradevolume",
            "shares",
        ],
    ),
    (
        Column::Amount,
        &[
            "成交金额",
            "金额",
            "发生金额",
            "清算金额",
            "amount",
            "tradeamount",
            "grossamount",
            "turnover",
        ],
    ),
    (
        Column::Price,
        &[
            "成交价格",
            "成交价",
            "价格",
            "成交均价",
            "price",
            "tradeprice",
            "avgprice",
            "unitprice",
        ],
    ),
    (
        Column::Date,
        &[
            "交易日期",
            "成交日期",
            "日期",
            "发生日期",
            "业务日期",
            "tradedate",
            "date",
            "transactiondate",
            "businessdate",
        ],
    ),
    (
        Column::Direction,
        &[
            "买卖方向",
            "买卖标志",
            "方向",
            "操作",
            "委托方向",
            "direction",
            "side",
            "bsflag",
            "buysell",
        ],
    ),
];

/// Resolved mapping from sheet columns to the canonical schema.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaMap {
    /// Canonical column to zero-based index in the observed header.
    bindings: BTreeMap<Column, usize>,
    /// Observed names that hit an already-bound canonical column.
    duplicates: Vec<String>,
}

impl SchemaMap {
    /// Returns the header index bound to the given canonical column.
    #[must_use]
    pub fn index_of(&self, column: Column) -> Option<usize> {
        self.bindings.get(&column).copied()
    }

    /// Returns whether the given canonical column resolved.
    #[must_use]
    pub fn has(&self, column: Column) -> bool {
        self.bindings.contains_key(&column)
    }

    /// Returns the canonical columns that resolved.
    pub fn resolved(&self) -> impl Iterator<Item = Column> + '_ {
        self.bindings.keys().copied()
    }

    /// Returns observed names dropped because their canonical column was
    /// already bound by an earlier header cell.
    #[must_use]
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }
}

/// Cleans an observed column name for table lookup.
///
/// Header cells arrive with stray spaces and embedded newlines; all
/// whitespace is removed and the result case-folded.
fn clean_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Looks up the canonical column for one observed name.
///
/// Pure table lookup: first matching variant wins, unmatched names return
/// `None`.
#[must_use]
pub fn canonical_of(observed: &str) -> Option<Column> {
    let cleaned = clean_name(observed);
    if cleaned.is_empty() {
        return None;
    }
    SYNONYMS
        .iter()
        .find(|(_, variants)| variants.contains(&cleaned.as_str()))
        .map(|(column, _)| *column)
}

/// Resolves a row of observed column names against the synonym table.
///
/// Names are processed left to right; the first name to hit a canonical
/// column binds it, and any later name hitting the same column is recorded
/// as a duplicate rather than silently overwriting the binding. Names that
/// match nothing pass through unmapped.
#[must_use]
pub fn resolve_columns(observed: &[String]) -> SchemaMap {
    let mut map = SchemaMap::default();

    for (index, name) in observed.iter().enumerate() {
        let Some(column) = canonical_of(name) else {
            continue;
        };
        if map.bindings.contains_key(&column) {
            map.duplicates.push(name.clone());
        } else {
            map.bindings.insert(column, index);
        }
    }

    map
}

/// Returns the full synonym table, for display to users wondering which
/// headers will match.
#[must_use]
pub const fn synonym_table() -> &'static [(Column, &'static [&'static str])] {
    SYNONYMS
}
