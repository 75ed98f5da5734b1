//! Retail module - product commerce events

mod builder;


pub use builder::{
    ADDED_TO_CART_EVENT, BROWSED_PRODUCT_EVENT, PURCHASED_EVENT, RetailEvent,
    SHARED_PRODUCT_EVENT, STARRED_PRODUCT_EVENT,
};
