pub mod booking;
pub mod city;
pub mod guide;
pub mod link;
pub mod trip;
