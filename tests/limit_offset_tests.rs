use drf_pagination::{
   EqualityFilters, Error, Field, Fields, LimitOffsetPagination, MemorySource, PageRequest,
   Paginated, PaginationConfig, Paginator,
};
use serde_json::json;

#[derive(Debug, Clone)]
struct Person {
   id: i64,
   name: String,
   greetings: String,
}

fn person_fields() -> Fields<Person> {
   Fields::new()
      .with(Field::required("Id", |p: &Person| p.id))
      .with(Field::required("Name", |p: &Person| p.name.clone()))
      .with(Field::required("Greetings", |p: &Person| p.greetings.clone()))
}

/// Seed people 1..=count. Every fourth one says "Hola".
fn people(count: i64) -> MemorySource<Person> {
   MemorySource::with_rows(
      person_fields(),
      (1..=count).map(|id| Person {
         id,
         name: format!("Person {}", id),
         greetings: if id % 4 == 0 { "Hola" } else { "Hello" }.to_string(),
      }),
   )
}

async fn paginate(source: &MemorySource<Person>, url: &str) -> Paginated<Person> {
   let pagination = LimitOffsetPagination::new(PaginationConfig::default()).unwrap();
   let request = PageRequest::from_url(url).unwrap();
   let applied = EqualityFilters::new(source.fields()).apply(request.params());
   pagination
      .paginate(source, &request.with_filters(applied))
      .await
      .unwrap()
}

fn ids(page: &Paginated<Person>) -> Vec<i64> {
   page.results.iter().map(|p| p.id).collect()
}

// ─── Links ───

#[tokio::test]
async fn first_page() {
   let source = people(50);

   let page = paginate(&source, "https://example.com").await;

   assert_eq!(page.count, Some(50));
   assert_eq!(ids(&page), (1..=10).collect::<Vec<_>>());
   assert_eq!(page.previous, None);
   assert_eq!(
      page.next.as_deref(),
      Some("https://example.com/?limit=10&offset=10")
   );
}

#[tokio::test]
async fn second_page_previous_drops_offset() {
   let source = people(50);

   let page = paginate(&source, "https://example.com/?limit=10&offset=10").await;

   assert_eq!(ids(&page), (11..=20).collect::<Vec<_>>());
   assert_eq!(page.previous.as_deref(), Some("https://example.com/?limit=10"));
   assert_eq!(
      page.next.as_deref(),
      Some("https://example.com/?limit=10&offset=20")
   );
}

#[tokio::test]
async fn middle_page() {
   let source = people(50);

   let page = paginate(&source, "https://example.com/people?offset=25&limit=5").await;

   assert_eq!(ids(&page), (26..=30).collect::<Vec<_>>());
   assert_eq!(
      page.previous.as_deref(),
      Some("https://example.com/people?limit=5&offset=20")
   );
   assert_eq!(
      page.next.as_deref(),
      Some("https://example.com/people?limit=5&offset=30")
   );
}

#[tokio::test]
async fn last_page() {
   let source = people(50);

   let page = paginate(&source, "https://example.com/?limit=10&offset=40").await;

   assert_eq!(ids(&page), (41..=50).collect::<Vec<_>>());
   assert_eq!(page.next, None);
   assert_eq!(
      page.previous.as_deref(),
      Some("https://example.com/?limit=10&offset=30")
   );
}

#[tokio::test]
async fn offset_smaller_than_limit() {
   let source = people(50);

   let page = paginate(&source, "https://example.com/?limit=10&offset=3").await;

   assert_eq!(ids(&page), (4..=13).collect::<Vec<_>>());
   assert_eq!(page.previous.as_deref(), Some("https://example.com/?limit=10"));
}

#[tokio::test]
async fn offset_past_the_end() {
   let source = people(50);

   let page = paginate(&source, "https://example.com/?offset=70").await;

   assert!(page.is_empty());
   assert_eq!(page.count, Some(50));
   assert_eq!(page.next, None);
   assert_eq!(
      page.previous.as_deref(),
      Some("https://example.com/?limit=10&offset=60")
   );
}

#[tokio::test]
async fn offset_at_the_largest_integer() {
   let source = people(50);

   let page = paginate(&source, &format!("https://example.com/?offset={}", usize::MAX)).await;

   assert!(page.is_empty());
   assert_eq!(page.count, Some(50));
   assert_eq!(page.next, None);
   assert_eq!(
      page.previous.as_deref(),
      Some(format!("https://example.com/?limit=10&offset={}", usize::MAX - 10).as_str())
   );
}

// ─── Invalid parameters ───

#[tokio::test]
async fn invalid_limit_and_offset_fall_back() {
   let source = people(50);

   let page = paginate(&source, "https://example.com/?limit=abc&offset=-7").await;

   assert_eq!(ids(&page), (1..=10).collect::<Vec<_>>());
   assert_eq!(page.previous, None);
}

#[tokio::test]
async fn limit_is_clamped_to_max_page_size() {
   let source = people(50);

   let page = paginate(&source, "https://example.com/?limit=1000").await;

   assert_eq!(page.results.len(), 25);
   assert_eq!(
      page.next.as_deref(),
      Some("https://example.com/?limit=25&offset=25")
   );
}

// ─── Filters ───

#[tokio::test]
async fn filters_are_counted_and_carried() {
   let source = people(50);

   let page = paginate(&source, "https://example.com/?greetings=Hola&limit=5&offset=5").await;

   assert_eq!(page.count, Some(12));
   assert_eq!(ids(&page), vec![24, 28, 32, 36, 40]);
   assert_eq!(
      page.next.as_deref(),
      Some("https://example.com/?greetings=Hola&limit=5&offset=10")
   );
   assert_eq!(
      page.previous.as_deref(),
      Some("https://example.com/?greetings=Hola&limit=5")
   );
}

// ─── Envelope and errors ───

#[tokio::test]
async fn envelope_json_shape() {
   let source = people(2);

   let page = paginate(&source, "https://example.com/?limit=1")
      .await
      .map(|p| p.name);

   assert_eq!(
      serde_json::to_value(&page).unwrap(),
      json!({
         "count": 2,
         "next": "https://example.com/?limit=1&offset=1",
         "previous": null,
         "results": ["Person 1"],
      })
   );
}

#[tokio::test]
async fn closed_source() {
   let source = people(5);
   source.close();
   let pagination = LimitOffsetPagination::new(PaginationConfig::default()).unwrap();
   let request = PageRequest::from_url("https://example.com/").unwrap();

   let result: Result<Paginated<Person>, Error> = pagination.paginate(&source, &request).await;

   assert!(matches!(result, Err(Error::DataSource(_))));
}
