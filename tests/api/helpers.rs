use petstore_contract::configuration::get_configuration;
use petstore_contract::petstore_client::{ApiResponse, PetstoreClient};
use petstore_contract::telemetry::{get_subscriber, init_subscriber};
use std::sync::LazyLock;

// Ensure that the `tracing` stack is only initialised once using `LazyLock`
static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // We cannot assign the output of `get_subscriber` to a variable based on the
    // value TEST_LOG` because the sink is part of the type returned by
    // `get_subscriber`, therefore they are not the same type. We could work around
    // it, but this is the most straight-forward way of moving forward.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApi {
    pub client: PetstoreClient,
}

/// Wire a client against the remote API from the suite configuration.
pub fn test_api() -> TestApi {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    LazyLock::force(&TRACING);

    let configuration = get_configuration().expect("Failed to read configuration.");
    TestApi {
        client: configuration.api.client(),
    }
}

/// Locate the fixture's entry in a findByStatus listing.
///
/// The shared public store contains records created by other clients; the
/// listing is narrowed down to the entry whose id matches ours.
pub fn find_pet_in_listing(listing: &serde_json::Value, id: u64) -> Option<&serde_json::Value> {
    listing
        .as_array()?
        .iter()
        .find(|pet| pet["id"].as_u64() == Some(id))
}

/// A rejected request must not leak a resource payload alongside its error
/// status.
pub fn assert_no_pet_payload(response: &ApiResponse) {
    assert!(
        !response.status.is_success(),
        "The API accepted a request it should have rejected"
    );
    if let Some(body) = &response.body {
        assert!(
            body.get("photoUrls").is_none() && body.get("status").is_none(),
            "The error response leaked a pet payload: {}",
            body
        );
    }
}
