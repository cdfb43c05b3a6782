//! Server-side card markup for the country selector page.

use std::fmt::Write;

use crate::domains::instagram::{Country, NormalizedPost};

use super::dataset::{CountryPosts, Dataset, DiscussionPost};
use super::format::{escape_html, format_number};

/// What the page shows: cards for a selected country, or the empty state.
#[derive(Debug, Clone, PartialEq)]
pub enum ShowcaseView<'a> {
    Empty,
    Posts {
        country: &'a str,
        flag: Option<&'static str>,
        posts: CountryPosts<'a>,
    },
}

impl<'a> ShowcaseView<'a> {
    /// A blank selection shows the empty state. Any other selection shows the
    /// posts section, even when the country has no posts.
    pub fn select(dataset: &'a Dataset, selection: Option<&'a str>) -> Self {
        match selection.map(str::trim).filter(|c| !c.is_empty()) {
            None => ShowcaseView::Empty,
            Some(country) => ShowcaseView::Posts {
                country,
                flag: Country::from_name(country).map(|c| c.flag()),
                posts: dataset.for_country(country),
            },
        }
    }

    fn selected(&self) -> Option<&'a str> {
        match self {
            ShowcaseView::Empty => None,
            ShowcaseView::Posts { country, .. } => Some(*country),
        }
    }
}

pub fn instagram_card(post: &NormalizedPost) -> String {
    let caption = escape_html(&post.caption);
    format!(
        r#"<div class="instagram-card bg-white rounded-2xl overflow-hidden shadow-md hover:shadow-xl transition-shadow">
  <div class="aspect-square overflow-hidden">
    <img src="{image}" alt="{caption}" class="w-full h-full object-cover" loading="lazy">
  </div>
  <div class="p-4">
    <div class="flex items-center gap-2 mb-3">
      <div class="w-8 h-8 bg-gradient-to-br from-purple-500 to-pink-500 rounded-full"></div>
      <span class="font-medium text-gray-900">@{username}</span>
    </div>
    <p class="text-gray-700 text-sm mb-3 line-clamp-2">{caption}</p>
    <div class="flex items-center justify-between text-gray-500 text-sm">
      <div class="flex items-center gap-1">
        <svg class="w-5 h-5 text-red-500" fill="currentColor" viewBox="0 0 24 24"><path d="M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z"/></svg>
        <span>{likes}</span>
      </div>
      <span>{date}</span>
    </div>
  </div>
</div>"#,
        image = escape_html(&post.image),
        caption = caption,
        username = escape_html(&post.username),
        likes = format_number(post.likes),
        date = escape_html(&post.date),
    )
}

pub fn discussion_card(post: &DiscussionPost) -> String {
    format!(
        r#"<div class="reddit-card bg-gray-50 rounded-xl p-5 border border-gray-200 cursor-pointer">
  <div class="flex gap-4">
    <div class="flex flex-col items-center gap-1 text-gray-500">
      <svg class="w-5 h-5 text-orange-500" fill="currentColor" viewBox="0 0 24 24"><path d="M12 4l-8 8h6v8h4v-8h6z"/></svg>
      <span class="font-semibold text-gray-900">{upvotes}</span>
      <svg class="w-5 h-5" fill="currentColor" viewBox="0 0 24 24"><path d="M12 20l8-8h-6V4H10v8H4z"/></svg>
    </div>
    <div class="flex-1">
      <span class="text-xs font-medium text-orange-600 bg-orange-100 px-2 py-1 rounded-full">{subreddit}</span>
      <h3 class="text-lg font-semibold text-gray-900 mt-2 mb-2 hover:text-indigo-600 transition">{title}</h3>
      <div class="flex items-center gap-4 text-sm text-gray-500">
        <span>{author}</span>
        <span>•</span>
        <span>{date}</span>
        <span>•</span>
        <span>{comments} comments</span>
      </div>
    </div>
  </div>
</div>"#,
        upvotes = format_number(post.upvotes),
        subreddit = escape_html(&post.subreddit),
        title = escape_html(&post.title),
        author = escape_html(&post.author),
        date = escape_html(&post.date),
        comments = post.comments,
    )
}

fn country_options(selected: Option<&str>) -> String {
    let mut options = String::from(r#"<option value="">Choose a destination…</option>"#);
    for country in Country::ALL {
        let marker = if selected == Some(country.name()) {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            options,
            r#"<option value="{name}"{marker}>{flag} {name}</option>"#,
            name = country.name(),
            flag = country.flag(),
        );
    }
    options
}

fn posts_section(country: &str, flag: Option<&str>, posts: &CountryPosts<'_>) -> String {
    let heading = match flag {
        Some(flag) => format!("{} {}", flag, escape_html(country)),
        None => escape_html(country),
    };
    let instagram: String = posts.instagram.iter().map(|p| instagram_card(p)).collect();
    let reddit: String = posts.reddit.iter().map(|p| discussion_card(p)).collect();

    format!(
        r#"<section id="posts-container" class="max-w-6xl mx-auto px-4 py-12">
  <h2 class="text-3xl font-bold text-gray-900 mb-8">{heading}</h2>
  <h3 class="text-xl font-semibold text-gray-800 mb-4">Instagram</h3>
  <div id="instagram-grid" class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 mb-12">{instagram}</div>
  <h3 class="text-xl font-semibold text-gray-800 mb-4">Reddit</h3>
  <div id="reddit-list" class="space-y-4">{reddit}</div>
</section>"#
    )
}

const EMPTY_STATE: &str = r#"<section id="empty-state" class="max-w-6xl mx-auto px-4 py-24 text-center text-gray-500">
  <p class="text-lg">Pick a destination to see what travelers are sharing.</p>
</section>"#;

/// Full HTML page for a view.
pub fn render_page(view: &ShowcaseView<'_>) -> String {
    let body = match view {
        ShowcaseView::Empty => EMPTY_STATE.to_string(),
        ShowcaseView::Posts {
            country,
            flag,
            posts,
        } => posts_section(country, *flag, posts),
    };
    let options = country_options(view.selected());

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Travel Itinerary Generator</title>
  <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-100">
  <header class="max-w-6xl mx-auto px-4 pt-16 text-center">
    <h1 class="text-4xl font-bold text-gray-900 mb-6">Where to next?</h1>
    <form method="get" action="/">
      <select id="country-select" name="country" class="px-4 py-3 rounded-xl border border-gray-300" onchange="this.form.submit()">{options}</select>
      <noscript><button type="submit">Show posts</button></noscript>
    </form>
  </header>
  {body}
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::instagram::PostKey;

    fn dataset() -> Dataset {
        Dataset {
            instagram: vec![NormalizedPost {
                id: PostKey::Number(1),
                country: "Japan".into(),
                image: "https://img/1.jpg".into(),
                caption: "Sushi <3 & \"ramen\"".into(),
                username: "ana".into(),
                likes: 1500,
                date: "2 days ago".into(),
            }],
            reddit: vec![DiscussionPost {
                id: PostKey::Number(7),
                country: "Japan".into(),
                title: "Best onsen near Tokyo?".into(),
                subreddit: "r/JapanTravel".into(),
                author: "u/soaker".into(),
                upvotes: 2000,
                comments: 31,
                date: "5 hours ago".into(),
            }],
        }
    }

    #[test]
    fn test_blank_selection_is_empty_state() {
        let data = dataset();
        assert_eq!(ShowcaseView::select(&data, None), ShowcaseView::Empty);
        assert_eq!(ShowcaseView::select(&data, Some("  ")), ShowcaseView::Empty);

        let page = render_page(&ShowcaseView::Empty);
        assert!(page.contains(r#"id="empty-state""#));
        assert!(!page.contains(r#"id="posts-container""#));
    }

    #[test]
    fn test_country_without_posts_still_shows_posts_section() {
        let data = dataset();
        let view = ShowcaseView::select(&data, Some("France"));

        match &view {
            ShowcaseView::Posts { flag, posts, .. } => {
                assert_eq!(*flag, Some("🇫🇷"));
                assert!(posts.is_empty());
            }
            other => panic!("unexpected view: {other:?}"),
        }
        let page = render_page(&view);
        assert!(page.contains(r#"id="posts-container""#));
        assert!(!page.contains("instagram-card"));
    }

    #[test]
    fn test_cards_render_formatted_counts_and_escape_text() {
        let data = dataset();
        let page = render_page(&ShowcaseView::select(&data, Some("Japan")));

        assert!(page.contains("1.5K"));
        assert!(page.contains("2K"));
        assert!(page.contains("31 comments"));
        assert!(page.contains("Sushi &lt;3 &amp; &quot;ramen&quot;"));
        assert!(!page.contains("Sushi <3"));
        assert!(page.contains(r#"<option value="Japan" selected>"#));
    }

    #[test]
    fn test_unknown_country_has_no_flag() {
        let data = dataset();
        let view = ShowcaseView::select(&data, Some("<Atlantis>"));
        let page = render_page(&view);

        assert!(page.contains("&lt;Atlantis&gt;"));
        assert!(!page.contains(" selected>"));
    }
}
