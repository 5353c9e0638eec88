mod controls;
mod panels;
mod results;
