mod echo;
mod external;
mod file;
mod inner;
mod smart;
mod table;
