/*
[INPUT]:  API schema definitions
[OUTPUT]: Typed request/response surface for the adapter
[POS]:    Data layer - module wiring
[UPDATE]: When types are added or renamed
*/

pub mod enums;
pub mod requests;
pub mod responses;

pub use enums::{OrderStatus, OrderType, Side, TimeInForce};
pub use requests::{NewOrderRequest, OrderParams};
pub use responses::{ApiErrorBody, NewOrderResponse, ServerTime};
