pub mod handler;
pub mod mode;
pub mod pager;
pub mod presenter;
pub mod routes;
pub mod view;
