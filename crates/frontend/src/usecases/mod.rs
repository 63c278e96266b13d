pub mod u501_book_appointment;
