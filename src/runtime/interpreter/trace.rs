use crate::runtime::{
    data_structures::value::Value,
    interpreter::{ContinuationQueue, Item},
};
use ansi_term::Colour::{Cyan, Yellow};
use std::io::{self, Write};

/// Lines of the rendered trace are cut down to this many columns.
const TRACE_WIDTH: usize = 80;

/// One step of a traced run.
struct TraceRow {
    stack: String,
    item: String,
    continuation: String,
}

/// Snapshots of the interpreter taken before each item is evaluated: the stack, the item about to
/// run and the rest of the queue.  Purely observational, a run behaves the same with or without
/// it.
///
/// Rendered as an aligned table once the run ends:
///
/// ```text
/// ..     : 5 : 2 -
/// ..   5 : 2 : -
/// .. 5 2 : -
/// ```
pub struct ExecutionTrace {
    enabled: bool,
    rows: Vec<TraceRow>,
}

impl ExecutionTrace {
    pub fn new(enabled: bool) -> ExecutionTrace {
        ExecutionTrace {
            enabled,
            rows: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Take a snapshot.  Does nothing when tracing is off.
    pub fn record(&mut self, stack: &[Value], item: &Item, queue: &ContinuationQueue) {
        if !self.enabled {
            return;
        }

        self.rows.push(TraceRow {
            stack: join(stack.iter()),
            item: item.to_string(),
            continuation: join(queue.iter()),
        });
    }

    /// Render the table, one line per step.  Colour wraps the stack and item columns after they are
    /// padded so the escape codes don't upset the alignment.
    pub fn lines(&self, colored: bool) -> Vec<String> {
        let stack_width = self.rows.iter().map(|row| width(&row.stack)).max().unwrap_or(0);
        let item_width = self.rows.iter().map(|row| width(&row.item)).max().unwrap_or(0);

        let used = 3 + stack_width + 3 + item_width;
        let room = TRACE_WIDTH.saturating_sub(used);

        self.rows
            .iter()
            .map(|row| {
                let stack = format!("{:>width$}", row.stack, width = stack_width);
                let item = format!("{:>width$}", row.item, width = item_width);
                let continuation: String = if row.continuation.is_empty() {
                    String::new()
                } else {
                    format!(" : {}", row.continuation).chars().take(room).collect()
                };

                if colored {
                    format!(
                        ".. {} : {}{}",
                        Yellow.paint(stack),
                        Cyan.paint(item),
                        continuation.trim_end()
                    )
                } else {
                    format!(".. {} : {}{}", stack, item, continuation.trim_end())
                }
            })
            .collect()
    }

    /// Write the rendered table.
    pub fn write_to(&self, output: &mut dyn Write, colored: bool) -> io::Result<()> {
        for line in self.lines(colored) {
            writeln!(output, "{}", line)?;
        }

        output.flush()
    }
}

fn join<T: ToString>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(" ")
}

fn width(text: &str) -> usize {
    text.chars().count()
}
