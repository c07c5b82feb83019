mod resumes;

pub use resumes::ResumeRepository;
