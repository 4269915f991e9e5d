// Resume parsing LLM prompt templates.
// All prompts for the resume module are defined here.

pub const RESUME_PARSE_PROMPT: &str = r#"You are a resume parser. Extract the following features in JSON format.
If a value can't be found or inferred from the resume, use "" for strings, -1 for integers and floats, and [] for lists.

FIELDS:
- full_name (string, e.g., "John Doe")
- email_address (string, e.g., "john.doe@example.com")
- phone_number (string, e.g., "+1 123 456 7890")
- location (list of objects with keys "country" and "city", e.g., [{"country": "United States", "city": "New York"}, {"country": "Germany", "city": "Berlin"}])
- linkedin_profile_url (string, e.g., "https://www.linkedin.com/in/johndoe/")
- skills (list of strings, e.g., ["Python", "TensorFlow", "Communication"])
- previous_job_titles (list of strings, e.g., ["Software Engineer", "Data Scientist"])
- previous_companies (list of strings, e.g., ["Google", "Microsoft"])
- total_years_of_professional_experience (integer, e.g., 3)
- number_of_projects (integer, e.g., 2)
- bachelors_degree_program (string, e.g., "Computer Science")
- bachelors_gpa (float, e.g., 3.8)
- masters_degree_program (string, e.g., "Data Science")
- masters_gpa (float, e.g., 3.4)
- languages (list of objects with keys "language" and "proficiency_level", where "proficiency_level" must be one of "Elementary", "Working", "Fluent", "Native", "", e.g., [{"language": "French", "proficiency_level": "Native"}, {"language": "English", "proficiency_level": "Working"}])

Return ONLY the JSON object, nothing else, no code fences.

RESUME TEXT:
{resume_text}"#;

/// Every top-level key the prompt asks for.
pub const RESUME_FIELDS: &[&str] = &[
    "full_name",
    "email_address",
    "phone_number",
    "location",
    "linkedin_profile_url",
    "skills",
    "previous_job_titles",
    "previous_companies",
    "total_years_of_professional_experience",
    "number_of_projects",
    "bachelors_degree_program",
    "bachelors_gpa",
    "masters_degree_program",
    "masters_gpa",
    "languages",
];
