mod create_property;
mod create_user;
mod get_user;
mod list_past_reservations;
mod search_properties;

pub use create_property::CreatePropertyUseCase;
pub use create_user::CreateUserUseCase;
pub use get_user::GetUserUseCase;
pub use list_past_reservations::ListPastReservationsUseCase;
pub use search_properties::SearchPropertiesUseCase;
