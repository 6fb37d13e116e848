use maud::{DOCTYPE, Markup, html};

use crate::{
    entities::movie,
    forms::{AddForm, EditForm, FieldError, error_for},
    tmdb::MovieSummary,
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const INPUT_CLASS: &str = "mt-2 w-full rounded-md border border-gray-300 px-3 py-2 \
     focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500";

pub fn index_page(movies: &[movie::Model]) -> String {
    page(
        "My Top Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                            p class="mt-2 text-gray-600" { "Movies you have watched, ranked by your rating." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/add" { "Add Movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "Nothing tracked yet. Add your first movie." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for movie in movies {
                                (movie_card(movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn edit_page(movie: &movie::Model, form: &EditForm, errors: &[FieldError]) -> String {
    // On re-render the submitted values win over what is stored.
    let rating = form
        .new_rating
        .clone()
        .or_else(|| movie.rating.map(|r| r.to_string()))
        .unwrap_or_default();
    let review =
        form.new_review.clone().or_else(|| movie.review.clone()).unwrap_or_default();

    page(
        "Edit Rating",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { (movie.title) }
                        p class="mt-2 text-gray-600" { "Update your rating and review." }

                        form class="mt-8 space-y-6" method="post" action=(format!("/edit/{}", movie.id)) {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="new_rating" { "Your Rating (out of 10)" }
                                input class=(INPUT_CLASS) name="new_rating" id="new_rating" value=(rating);
                                (field_message(errors, "new_rating"))
                            }

                            div {
                                label class="block text-sm font-medium text-gray-700" for="new_review" { "Your Review" }
                                input class=(INPUT_CLASS) name="new_review" id="new_review" value=(review);
                                (field_message(errors, "new_review"))
                            }

                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Change Rating" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

pub fn add_page(form: &AddForm, errors: &[FieldError]) -> String {
    let title = form.movie_title.clone().unwrap_or_default();

    page(
        "Add Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "Add Movie" }
                        p class="mt-2 text-gray-600" { "Search The Movie Database by title." }

                        form class="mt-8 space-y-6" method="post" action="/add" {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="movie_title" { "Movie Title" }
                                input class=(INPUT_CLASS) name="movie_title" id="movie_title" value=(title);
                                (field_message(errors, "movie_title"))
                            }

                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Add Movie" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

pub fn select_page(candidates: &[MovieSummary]) -> String {
    page(
        "Select Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    h1 class="text-3xl font-bold text-gray-900" { "Select Movie" }

                    @if candidates.is_empty() {
                        div class="mt-8 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No results. Try a different title." }
                            a class="mt-4 inline-block text-blue-600 hover:text-blue-800" href="/add" { "Search again" }
                        }
                    } @else {
                        ul class="mt-8 space-y-3" {
                            @for candidate in candidates {
                                li class="bg-white shadow rounded-lg p-4" {
                                    a class="text-blue-600 hover:text-blue-800 font-medium" href=(format!("/find?movie_id={}", candidate.id)) {
                                        (candidate.title)
                                        @if !candidate.release_date.is_empty() {
                                            span class="ml-2 font-normal text-gray-500" { "(" (candidate.release_date) ")" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn movie_card(movie: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6 flex gap-6" {
            img class="h-36 w-24 rounded object-cover bg-gray-200" src=(movie.image_url) alt=(movie.title);

            div class="flex-1" {
                div class="flex items-start justify-between gap-4" {
                    h2 class="text-xl font-semibold text-gray-900" {
                        @if let Some(ranking) = movie.ranking {
                            span class="mr-2 text-gray-400" { (ranking) "." }
                        }
                        (movie.title)
                        span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                    }
                    div class="flex gap-3 text-sm" {
                        a class="text-blue-600 hover:text-blue-800" href=(format!("/edit/{}", movie.id)) { "Edit" }
                        a class="text-red-600 hover:text-red-800" href=(format!("/{}", movie.id)) { "Delete" }
                    }
                }

                p class="mt-2 text-sm text-gray-600" { (movie.description) }

                div class="mt-3 text-sm text-gray-700" {
                    @match movie.rating {
                        Some(rating) => { span class="font-medium" { (rating) " / 10" } }
                        None => { span class="text-gray-400" { "Not rated yet" } }
                    }
                    @if let Some(review) = &movie.review {
                        span class="text-gray-500" { " · " (review) }
                    }
                }
            }
        }
    }
}

fn field_message(errors: &[FieldError], field: &str) -> Markup {
    html! {
        @if let Some(err) = error_for(errors, field) {
            p class="mt-2 text-sm text-red-600" { (err.message) }
        }
    }
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}
