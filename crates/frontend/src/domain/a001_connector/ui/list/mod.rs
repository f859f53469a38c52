mod view;

pub use view::ConnectorsPage;
