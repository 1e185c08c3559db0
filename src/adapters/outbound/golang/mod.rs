/// Go toolchain adapter that loads import graphs through `go list`
mod go_list_loader;

pub use go_list_loader::GoListLoader;
