use bookslab::render::render_chain;
use bookslab::SlabList;

/// A bounded undo history: the oldest edits can't be dropped, so once the
/// history is full new edits are refused until something is undone.
struct UndoStack {
    edits: SlabList<String>,
}

impl UndoStack {
    /// Creates a history able to hold `depth` edits
    fn new(depth: usize) -> Result<Self, bookslab::Error> {
        Ok(Self {
            edits: SlabList::with_capacity(depth)?,
        })
    }

    /// Records an edit
    fn record(&mut self, edit: &str) -> Result<(), bookslab::Error> {
        self.edits.insert_at_head(edit.to_owned())?;
        Ok(())
    }

    /// Takes back the most recent edit
    fn undo(&mut self) -> Option<String> {
        self.edits.delete_at_head().ok()
    }
}

fn main() {
    let mut history = UndoStack::new(3).expect("Failed to create history");

    for edit in ["insert 'hello'", "bold line 1", "delete word", "indent"] {
        match history.record(edit) {
            Ok(()) => println!("Recorded: {}", edit),
            Err(e) => println!("Couldn't record {:?}: {}", edit, e),
        }
    }

    println!("History: {}", render_chain(history.edits.links()));

    while let Some(edit) = history.undo() {
        println!("Undid: {}", edit);
    }

    println!("History: {}", render_chain(history.edits.links()));
}
