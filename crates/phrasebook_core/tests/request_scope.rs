use phrasebook_core::{
    ContentContext, ContentDatabase, Dictionary, EntryCreator, MemoryContext, MemoryDatabase,
    PhraseRepository, RequestScope, SiteDictionaryProvider, TreeEntryService,
    CURRENT_REPOSITORY_KEY,
};
use std::rc::Rc;

fn wiring() -> (
    SiteDictionaryProvider,
    Rc<dyn ContentContext>,
    Rc<dyn EntryCreator>,
) {
    let database = Rc::new(MemoryDatabase::new());
    let root = database.create_root("Dictionary");
    let provider = SiteDictionaryProvider::new(Dictionary::new(root, "example", true));
    let context: Rc<dyn ContentContext> =
        Rc::new(MemoryContext::with_database(Rc::clone(&database)));
    let creator: Rc<dyn EntryCreator> =
        Rc::new(TreeEntryService::new(database as Rc<dyn ContentDatabase>));
    (provider, context, creator)
}

#[test]
fn current_reuses_one_instance_within_a_scope() {
    let (provider, context, creator) = wiring();
    let scope = RequestScope::new();

    let first = PhraseRepository::current(
        Some(&scope),
        &provider,
        Rc::clone(&context),
        Rc::clone(&creator),
    );
    let second = PhraseRepository::current(Some(&scope), &provider, context, creator);

    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(scope.len(), 1);
}

#[test]
fn current_stores_the_instance_under_the_fixed_key() {
    let (provider, context, creator) = wiring();
    let scope = RequestScope::new();

    let built = PhraseRepository::current(Some(&scope), &provider, context, creator);
    let cached = scope
        .get::<PhraseRepository>(CURRENT_REPOSITORY_KEY)
        .expect("scope should hold the repository");
    assert!(Rc::ptr_eq(&built, &cached));
}

#[test]
fn independent_scopes_get_distinct_instances() {
    let (provider, context, creator) = wiring();
    let first_scope = RequestScope::new();
    let second_scope = RequestScope::new();

    let first = PhraseRepository::current(
        Some(&first_scope),
        &provider,
        Rc::clone(&context),
        Rc::clone(&creator),
    );
    let second = PhraseRepository::current(Some(&second_scope), &provider, context, creator);

    assert!(!Rc::ptr_eq(&first, &second));
}

#[test]
fn without_a_scope_every_call_builds_a_fresh_instance() {
    let (provider, context, creator) = wiring();

    let first = PhraseRepository::current(None, &provider, Rc::clone(&context), Rc::clone(&creator));
    let second = PhraseRepository::current(None, &provider, context, creator);

    assert!(!Rc::ptr_eq(&first, &second));
}

#[test]
fn current_is_wired_to_the_provider_dictionary() {
    let (provider, context, creator) = wiring();
    let scope = RequestScope::new();

    let repository = PhraseRepository::current(Some(&scope), &provider, context, creator);
    assert_eq!(repository.dictionary().site_name, "example");
    assert!(repository.dictionary().auto_create);

    let phrase = repository.get("welcome", Some("Hi")).unwrap();
    assert_eq!(phrase.as_deref(), Some("Hi"));
}
