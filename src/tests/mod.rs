mod gray;
mod occupancy;
mod reset;
