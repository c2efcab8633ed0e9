// Route catalog of the whiskey tasting application, in display order.

use crate::models::{HttpMethod::*, RouteDescriptor as Route};

/// Browser-facing pages
pub static WEB_ROUTES: [Route; 9] = [
    Route::new(Get, "/", "Landing page"),
    Route::new(Get, "/home", "Home page"),
    Route::new(Get, "/inventory", "Inventory listing with filters and sorting")
        .params("Query: brand, type, subtype, sort_by (default brand), order (asc|desc)"),
    Route::new(Get, "/users", "Users page with their reviews"),
    Route::new(Get, "/events", "Events list"),
    Route::new(
        Get,
        "/event",
        "Event console view. This page has the intention of being run on a central device, \
         showing all the whiskeys, reviews and photos from the event.",
    )
    .params("Query: id, version=client|console"),
    Route::new(
        Get,
        "/event_client",
        "Event client view. This page has the intention of being run on user devices. \
         This removes the current reviews and ratings of bottles to leave the tasting un-biased.",
    )
    .params("Query: id; requires user_id cookie"),
    Route::new(Get, "/bartender", "Admin console with table dump/"),
    Route::new(
        Get,
        "/expert_notes",
        "Expert notes editor view for the admin console. Enables the setting and changing of \
         expert notes for each bottle through a simple UI",
    ),
];

/// JSON, form and asset endpoints
pub static API_ROUTES: [Route; 19] = [
    Route::new(Get, "/api/bottles", "Paginated bottle list")
        .params("Query: offset (default 0), limit (default 30)")
        .returns("Array of {id, brand, name, abv, image_path, available}"),
    Route::new(Post, "/api/add_bottle", "Create a new bottle record")
        .params(
            "JSON: brand, name, abv, spirit_type, subtype (optional), description (optional), \
             photo (optional base64 data URL)",
        )
        .returns("201 with {message, id}")
        .notes("If description is empty, it is generated via OpenAI."),
    Route::new(Get, "/get_images", "Fetch candidate bottle images")
        .params("Query: brand, name")
        .returns("{query, images:[data URLs]}"),
    Route::new(Post, "/api/remove_entry", "Delete a record from a table")
        .params("JSON: table, id"),
    Route::new(Post, "/api/make_unavailable", "Mark a bottle unavailable").params("JSON: id"),
    Route::new(Post, "/api/add_user", "Create a user")
        .params("JSON: name, photo (optional base64 data URL)"),
    Route::new(Post, "/api/add_review", "Create a review for a bottle")
        .params(
            "JSON: name (user name or id), review_text, notes (array), score (0-10), bottle_id, \
             event_id (optional)",
        )
        .returns("201 with {message, review_id}"),
    Route::new(Get, "/api/random_bottle_id", "Random available bottle id").returns("{id}"),
    Route::new(Post, "/api/add_event", "Create a tasting event")
        .params("JSON: name, event_date")
        .notes("Folder path uses name + date under ./database_images/events."),
    Route::new(Post, "/api/add_bottles_to_event", "Assign bottles to an event")
        .params("Form: event_id, bottle_ids (comma-separated)"),
    Route::new(Post, "/api/add_users_to_event", "Assign users to an event")
        .params("Form: event_id, user_ids (comma-separated)"),
    Route::new(Post, "/api/user_exists", "Lookup user id and set cookie")
        .params("Form: name")
        .returns("{user_id} and sets user_id cookie"),
    Route::new(Post, "/api/upload_event_photo_file", "Upload event photo (file)")
        .params("Form: event_id, image_file"),
    Route::new(Post, "/api/upload_event_photo_b64", "Upload event photo (base64)")
        .params("Form: event_id, image_data (data URL)"),
    Route::new(Post, "/api/edit_expert_notes", "Update expert notes and description")
        .params("JSON: bottle_id, description (optional), notes (array)"),
    Route::new(Get, "/api/check_bottle", "Check if bottle exists")
        .params("Query: brand, name")
        .returns("{exists:true|false}"),
    Route::new(Get, "/api/check_user", "Check if user exists")
        .params("Query: name")
        .returns("{exists:true|false}"),
    Route::new(Get, "/database_images/[path]", "Serve uploaded images")
        .params("path")
        .returns("Image as a Base64 encoded string"),
    Route::new(Post, "/modal/bottle", "Returns bottle details modal HTML")
        .params("JSON: bottle_id"),
];
