use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book.
///
/// The book is loaded once when the assistant starts and handed back for
/// saving when it stops; implementations never keep a live copy of their own.
pub trait AddressBookRepository {
    /// Restore the stored address book, or an empty one if nothing is stored.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored address book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
