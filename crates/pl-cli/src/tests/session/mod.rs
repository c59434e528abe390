mod state;
mod store;
