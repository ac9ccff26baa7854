//! Test fixtures and sample data.

use address_book::{AddressBook, Record};

/// John, born 1972-05-12, with two phones.
#[allow(dead_code)]
pub fn sample_john() -> Record {
    let mut record = Record::with_birthday("John", (1972, 5, 12)).expect("valid birthday");
    record.add_phone("1234567890").expect("valid phone");
    record.add_phone("5555555555").expect("valid phone");
    record
}

/// A record with one phone and no birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phone: &str) -> Record {
    let mut record = Record::new(name);
    record.add_phone(phone).expect("valid phone");
    record
}

/// A book holding `count` records named `Contact0`, `Contact1`, ...
#[allow(dead_code)]
pub fn sample_book(count: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..count {
        book.add_record(sample_record(&format!("Contact{}", i), &format!("{:010}", i)));
    }
    book
}
