mod department;
mod instructor;
mod role;
mod student;
mod subject;
mod user;
