//! GraphQL documents sent by [`super::journal::JournalClient`].

pub const GET_MOVIE_ENTRY: &str = r"
    query GetMovieEntry($id: ID!) {
        movieEntry(id: $id) {
            id
            title
            description
            stars
            createdAt
            updatedAt
            user
        }
    }
";

pub const GET_MOVIE_ENTRIES: &str = r"
    query GetMovieEntries {
        movieEntries {
            id
            title
            description
            stars
            createdAt
            updatedAt
            user
        }
    }
";

pub const SEARCH_MOVIE_ENTRIES: &str = r"
    query SearchMovieEntries($title: String!) {
        searchMovieEntries(title: $title) {
            id
            title
            description
            stars
            createdAt
            updatedAt
            user
        }
    }
";

pub const CREATE_MOVIE_ENTRY: &str = r"
    mutation CreateMovieEntry($input: MovieEntryInput!) {
        createMovieEntry(input: $input) {
            id
            title
            description
            stars
            createdAt
            updatedAt
            user
        }
    }
";

pub const UPDATE_MOVIE_ENTRY: &str = r"
    mutation UpdateMovieEntry($id: ID!, $input: MovieEntryInput!) {
        updateMovieEntry(id: $id, input: $input) {
            id
            title
            description
            stars
            createdAt
            updatedAt
            user
        }
    }
";

pub const DELETE_MOVIE_ENTRY: &str = r"
    mutation DeleteMovieEntry($id: ID!) {
        deleteMovieEntry(id: $id) {
            id
            title
            description
            stars
            createdAt
            updatedAt
            user
        }
    }
";

pub const CREATE_USER: &str = r"
    mutation CreateUser($input: CreateUserInput!) {
        createUser(input: $input) {
            id
            username
            email
            createdAt
            token
        }
    }
";

pub const LOGIN_USER: &str = r"
    mutation LoginUser($input: LoginInput!) {
        loginUser(input: $input) {
            id
            username
            email
            createdAt
            token
        }
    }
";
