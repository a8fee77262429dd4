// 콘솔 출력용 포맷팅
use crate::diagnostics::FrequencyReport;
use crate::selection::ConditionSelection;
use crate::table::{Weight, WeightedTable};
use serde::Serialize;
use std::fmt;
use std::hash::Hash;

/// Width of the `=== title ===` banner
pub const BANNER_WIDTH: usize = 55;

/// Section header centred between `=` fill
pub struct Banner<'a>(pub &'a str);

impl fmt::Display for Banner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let title = format!(" {} ", self.0);
        write!(f, "{:=^width$}", title, width = BANNER_WIDTH)
    }
}

impl<T: fmt::Display> fmt::Display for FrequencyReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Probability distribution test results ({} trials):", self.trials)?;
        for entry in &self.entries {
            writeln!(
                f,
                "  {}: {:.2}% (expected {:.2}%)",
                entry.item, entry.observed_percent, entry.expected_percent
            )?;
        }
        Ok(())
    }
}

/// Human-readable selection, one `+ <condition>` line per pick in table order
pub fn render_selection<C, W>(
    selection: &ConditionSelection<C>,
    table: &WeightedTable<C, W>,
) -> String
where
    C: Eq + Hash + Clone + fmt::Debug + fmt::Display,
    W: Weight,
{
    if selection.is_empty() {
        return "No planet conditions.\n".to_string();
    }

    let mut out = format!("Amount of planet conditions: {}\n", selection.count);
    for condition in selection.in_table_order(table) {
        out.push_str(&format!("\t+ {}\n", condition));
    }
    out
}

#[derive(Serialize)]
struct SelectionJson<'a, C> {
    count: usize,
    conditions: Vec<&'a C>,
}

/// JSON rendering: `{"count":2,"conditions":["Long cycles","Maze structure"]}`
pub fn selection_json<C, W>(
    selection: &ConditionSelection<C>,
    table: &WeightedTable<C, W>,
) -> Result<String, serde_json::Error>
where
    C: Eq + Hash + Clone + fmt::Debug + Serialize,
    W: Weight,
{
    serde_json::to_string(&SelectionJson {
        count: selection.count,
        conditions: selection.in_table_order(table),
    })
}
