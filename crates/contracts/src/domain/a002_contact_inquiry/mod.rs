pub mod aggregate;

pub use aggregate::ContactInquiry;
