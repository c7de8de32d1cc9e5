mod address_book;
mod traits;

pub use address_book::{AddressBook, BOOK_HEADER, EMPTY_BOOK};
pub use traits::ContactRepository;
