mod atlas;
mod country;
mod drag_board;
mod selected_shape;

#[doc(inline)]
pub use atlas::Atlas;

#[doc(inline)]
pub use country::Country;

#[doc(inline)]
pub use drag_board::DragBoard;

#[doc(inline)]
pub use drag_board::DragState;

#[doc(inline)]
pub use drag_board::DragTransition;

#[doc(inline)]
pub use drag_board::PointerEvent;

#[doc(inline)]
pub use selected_shape::SelectedShape;
