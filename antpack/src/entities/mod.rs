mod instance;
mod item;
mod item_set;
mod layout;

#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use item_set::ItemSet;
#[doc(inline)]
pub use layout::Layout;
