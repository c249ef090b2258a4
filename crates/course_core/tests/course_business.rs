use course_core::db::open_db_in_memory;
use course_core::{
    CourseBusiness, CourseDto, CourseError, CourseRepository, CourseView, CreateCourseInput,
    DeleteCourseInput, EditCourseInput, GetCoursesInput, SqliteCourseRepository,
};
use serde_json::json;

fn create_input(id: &str, name: &str, lessons: i64) -> CreateCourseInput {
    CreateCourseInput {
        id: id.to_string(),
        name: name.to_string(),
        lessons,
    }
}

fn edit_input(id_to_edit: &str) -> EditCourseInput {
    EditCourseInput {
        id_to_edit: id_to_edit.to_string(),
        new_id: None,
        new_name: None,
        new_lessons: None,
    }
}

fn validation_message(err: CourseError) -> String {
    match err {
        CourseError::Validation(message) => message,
        other => panic!("expected validation error, got {other:?}"),
    }
}

fn not_found_message(err: CourseError) -> String {
    match err {
        CourseError::NotFound(message) => message,
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn create_course_returns_message_and_stored_values() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let business = CourseBusiness::new(&repo);

    let output = business
        .create_course(&create_input("c1", "Math", 10))
        .unwrap();

    assert_eq!(
        serde_json::to_value(&output).unwrap(),
        json!({
            "message": "Curso registrado com sucesso",
            "course": {"id": "c1", "name": "Math", "lessons": 10}
        })
    );
    let stored = repo.find_course_by_id("c1").unwrap().unwrap();
    assert_eq!(stored.name, "Math");
    assert_eq!(stored.lessons, 10);
}

#[test]
fn create_course_rejects_short_name_before_anything_else() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let business = CourseBusiness::new(&repo);

    business
        .create_course(&create_input("taken", "Math", 10))
        .unwrap();

    for id in ["c1", "", "taken"] {
        for name in ["", "M"] {
            let err = business
                .create_course(&create_input(id, name, -5))
                .unwrap_err();
            assert_eq!(
                validation_message(err),
                "'name' deve possuir pelo menos 2 caracteres"
            );
        }
    }
    assert_eq!(repo.find_courses(None).unwrap().len(), 1);
}

#[test]
fn create_course_rejects_non_positive_lessons() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let business = CourseBusiness::new(&repo);

    for lessons in [0, -1, i64::MIN] {
        let err = business
            .create_course(&create_input("c1", "Math", lessons))
            .unwrap_err();
        assert_eq!(
            validation_message(err),
            "'lessons' não pode ser zero ou negativo"
        );
    }
}

#[test]
fn create_course_rejects_duplicate_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let business = CourseBusiness::new(&repo);

    business
        .create_course(&create_input("c1", "Math", 10))
        .unwrap();
    let err = business
        .create_course(&create_input("c1", "Physics", 4))
        .unwrap_err();

    assert_eq!(err.status_code(), 400);
    assert_eq!(validation_message(err), "'id' já existe");
    assert_eq!(repo.find_course_by_id("c1").unwrap().unwrap().name, "Math");
}

#[test]
fn create_course_accepts_empty_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let business = CourseBusiness::new(&repo);

    let output = business
        .create_course(&create_input("", "Math", 10))
        .unwrap();
    assert_eq!(output.course.id, "");
    assert_eq!(output.course.name, "Math");
    assert!(repo.find_course_by_id("").unwrap().is_some());
}

#[test]
fn get_courses_maps_records_and_applies_filter() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let business = CourseBusiness::new(&repo);

    business
        .create_course(&create_input("c1", "Math", 10))
        .unwrap();
    business
        .create_course(&create_input("c2", "History", 6))
        .unwrap();

    let all = business.get_courses(&GetCoursesInput::default()).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id(), "c1");
    assert_eq!(all[1].lessons(), 6);

    let filtered = business
        .get_courses(&GetCoursesInput {
            q: Some("hist".to_string()),
        })
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name(), "History");
}

#[test]
fn edit_course_with_only_name_keeps_id_and_lessons() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let business = CourseBusiness::new(&repo);
    business
        .create_course(&create_input("c1", "Math", 10))
        .unwrap();

    let output = business
        .edit_course(&EditCourseInput {
            new_name: Some("Algebra".to_string()),
            ..edit_input("c1")
        })
        .unwrap();

    assert_eq!(output.message, "Curso atualizado com sucesso");
    assert_eq!(
        output.course,
        CourseView {
            id: "c1".to_string(),
            name: "Algebra".to_string(),
            lessons: 10,
        }
    );
    let stored = repo.find_course_by_id("c1").unwrap().unwrap();
    assert_eq!(stored.name, "Algebra");
    assert_eq!(stored.lessons, 10);
}

#[test]
fn edit_course_can_rename_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let business = CourseBusiness::new(&repo);
    business
        .create_course(&create_input("c1", "Math", 10))
        .unwrap();

    let output = business
        .edit_course(&EditCourseInput {
            new_id: Some("m-101".to_string()),
            new_lessons: Some(12),
            ..edit_input("c1")
        })
        .unwrap();

    assert_eq!(output.course.id, "m-101");
    assert_eq!(output.course.lessons, 12);
    assert_eq!(repo.find_course_by_id("c1").unwrap(), None);
    assert!(repo.find_course_by_id("m-101").unwrap().is_some());
}

#[test]
fn edit_course_keeping_same_id_is_not_a_conflict() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let business = CourseBusiness::new(&repo);
    business
        .create_course(&create_input("c1", "Math", 10))
        .unwrap();

    let output = business
        .edit_course(&EditCourseInput {
            new_id: Some("c1".to_string()),
            ..edit_input("c1")
        })
        .unwrap();
    assert_eq!(output.course.id, "c1");
}

#[test]
fn edit_course_rejects_rename_onto_existing_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let business = CourseBusiness::new(&repo);
    business
        .create_course(&create_input("c1", "Math", 10))
        .unwrap();
    business
        .create_course(&create_input("c2", "History", 6))
        .unwrap();

    let err = business
        .edit_course(&EditCourseInput {
            new_id: Some("c2".to_string()),
            ..edit_input("c1")
        })
        .unwrap_err();
    assert_eq!(validation_message(err), "'id' já existe");
}

#[test]
fn edit_course_on_missing_id_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let business = CourseBusiness::new(&repo);

    let err = business
        .edit_course(&EditCourseInput {
            new_name: Some("Algebra".to_string()),
            ..edit_input("ghost")
        })
        .unwrap_err();

    assert_eq!(err.status_code(), 404);
    assert_eq!(not_found_message(err), "'id' para editar não existe");
}

#[test]
fn edit_course_validates_fields_before_lookup() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let business = CourseBusiness::new(&repo);

    let err = business
        .edit_course(&EditCourseInput {
            new_lessons: Some(0),
            ..edit_input("ghost")
        })
        .unwrap_err();
    assert_eq!(
        validation_message(err),
        "'lessons' não pode ser zero ou negativo"
    );

    let err = business
        .edit_course(&EditCourseInput {
            new_name: Some(String::new()),
            ..edit_input("ghost")
        })
        .unwrap_err();
    assert_eq!(
        validation_message(err),
        "'name' deve possuir pelo menos 2 caracteres"
    );

    let err = business
        .edit_course(&EditCourseInput {
            new_id: Some(String::new()),
            ..edit_input("ghost")
        })
        .unwrap_err();
    assert_eq!(validation_message(err), "'id' não pode ser vazio");
}

#[test]
fn delete_course_removes_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let business = CourseBusiness::new(&repo);
    business
        .create_course(&create_input("c1", "Math", 10))
        .unwrap();

    let output = business
        .delete_course(&DeleteCourseInput {
            id_to_delete: "c1".to_string(),
        })
        .unwrap();

    assert_eq!(output.message, "Curso deletado com sucesso");
    assert_eq!(repo.find_course_by_id("c1").unwrap(), None);
}

#[test]
fn delete_course_on_missing_id_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let business = CourseBusiness::new(&repo);

    let err = business
        .delete_course(&DeleteCourseInput {
            id_to_delete: "ghost".to_string(),
        })
        .unwrap_err();
    assert_eq!(not_found_message(err), "'id' para deletar não existe");
}

#[test]
fn raw_input_flows_through_dto_into_business() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::try_new(&conn).unwrap();
    let business = CourseBusiness::new(&repo);
    let dto = CourseDto::new();

    let input = dto
        .create_course_input(&json!("c1"), &json!("Math"), &json!(10))
        .unwrap();
    business.create_course(&input).unwrap();

    let edit = dto
        .edit_course_input("c1", None, None, Some(&json!(20)))
        .unwrap();
    let output = business.edit_course(&edit).unwrap();
    assert_eq!(output.course.name, "Math");
    assert_eq!(output.course.lessons, 20);

    let err = dto
        .create_course_input(&json!("c2"), &json!("Physics"), &json!("many"))
        .unwrap_err();
    assert_eq!(validation_message(err), "'lessons' deve ser number");
}
