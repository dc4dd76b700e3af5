pub mod city;
pub mod country;
pub mod response;
pub mod state;
