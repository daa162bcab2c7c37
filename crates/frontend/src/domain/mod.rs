pub mod a001_door;
pub mod a002_contact_inquiry;
