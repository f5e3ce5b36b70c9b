//! Address Book - Main entry point
//!
//! Loads the saved address book, runs the interactive assistant on the
//! terminal and saves the book after every change and again when the
//! session ends.

use address_book::{
    AddressBook, AddressBookRepository, Assistant, Config, ConsoleInterface, ContactService,
    JsonFileRepository, StorageError,
};
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only, stdout belongs to the assistant)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let repository = JsonFileRepository::new(&config.book_file);
    info!("Using address book file {:?}", repository.path());

    let book = match repository.load() {
        Ok(book) => book,
        Err(e @ StorageError::Json(_)) => {
            error!("Failed to parse address book: {}", e);
            match repository.set_aside() {
                Ok(backup) => println!(
                    "Could not read the address book ({}). It was moved to {:?}.",
                    e, backup
                ),
                Err(rename_err) => {
                    error!("Failed to move unreadable address book: {}", rename_err);
                    return Err(e.into());
                }
            }
            AddressBook::new()
        }
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };
    info!("Loaded {} contacts", book.len());

    let service = ContactService::new(book).with_birthday_window(config.birthday_window_days);
    let mut assistant = Assistant::new(service, ConsoleInterface::new())
        .with_autosave(Box::new(repository.clone()));
    assistant.run();

    let book = assistant.into_service().into_book();
    if let Err(e) = repository.save(&book) {
        error!("Failed to save address book: {}", e);
        println!("An unexpected error occurred: {}", e);
        return Err(e.into());
    }

    info!("Saved {} contacts, shutdown complete", book.len());
    Ok(())
}
