mod mock_repository;
mod scripted_interface;

pub use mock_repository::MockAddressBookRepository;
pub use scripted_interface::ScriptedInterface;
