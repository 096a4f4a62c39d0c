use super::*;

#[test]
fn destinations_cover_both_chat_routes_in_order() {
    assert_eq!(
        DESTINATIONS,
        [("General HCL", "/general"), ("Timpark HCL", "/timpark")]
    );
}
