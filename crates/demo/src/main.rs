//! Demonstration run: a small catalog, one reader, one loan.

mod config;

use std::sync::Arc;

use anyhow::{Context, Result};

use lendwise_catalog::InMemoryItemStore;
use lendwise_core::{Item, Logger};
use lendwise_library::{Library, Reader};
use lendwise_observability::TracingLogger;

use crate::config::DemoConfig;

fn catalog() -> Vec<Item> {
    vec![
        Item::new("BlaBla1", "isbn1", 10.20),
        Item::new("BlaBla1", "isbn1", 10.20),
        Item::new("BlaBla3", "isbn3", 15.70),
        Item::new("BlaBla2", "isbn2", 12.50),
    ]
}

fn main() -> Result<()> {
    let config = DemoConfig::from_env()?;
    lendwise_observability::init(config.log_format);

    let clock = config.clock()?;
    let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new());
    let mut library = Library::with_default_penalty(
        InMemoryItemStore::with_items(catalog()),
        clock,
        Arc::clone(&logger),
    );
    let mut reader = Reader::new(config.reader_name.clone(), logger);

    reader
        .borrow_from(&mut library, &Item::new("BlaBla2", "isbn2", 12.50))
        .context("demo borrow failed")?;

    library.display_all_items();
    library.display_available_items();
    library.display_borrowed_items();

    if let Err(err) = reader.return_first_borrowed_to(&mut library) {
        tracing::warn!(error = %err, "demo return failed");
    }
    library.display_available_items();
    library.display_borrowed_items();

    tracing::info!(reader = reader.name(), held = reader.held().len(), "demo finished");
    Ok(())
}
